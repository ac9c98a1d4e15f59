/// 3次元ベクトル型を定義。
pub mod point;

/// 球面・面UV・面ST・面IJの各座標系の相互変換。
pub mod projection;
