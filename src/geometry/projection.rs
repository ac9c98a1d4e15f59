use crate::cell_id::constants::MAX_SIZE;
use crate::geometry::point::Point;

/// 点が射影される立方体の面番号を返す。
///
/// 絶対値が最大の座標軸とその符号で面が決まる。ゼロベクトル以外の
/// すべてのベクトルに対して定義される全域関数。
pub fn face(p: &Point) -> u8 {
    let abs = [p.as_x().abs(), p.as_y().abs(), p.as_z().abs()];
    let mut f: u8 = if abs[0] > abs[1] {
        if abs[0] > abs[2] { 0 } else { 2 }
    } else if abs[1] > abs[2] {
        1
    } else {
        2
    };
    let component = match f {
        0 => p.as_x(),
        1 => p.as_y(),
        _ => p.as_z(),
    };
    if component < 0.0 {
        f += 3;
    }
    f
}

/// 面UV座標を球面空間のベクトルへ射影する。結果は正規化されない
pub fn face_uv_to_xyz(face: u8, u: f64, v: f64) -> Point {
    let (x, y, z) = match face {
        0 => (1.0, u, v),
        1 => (-u, 1.0, v),
        2 => (-u, -v, 1.0),
        3 => (-1.0, -v, -u),
        4 => (v, -1.0, -u),
        _ => (v, u, -1.0),
    };
    // 1つの成分が必ず±1のためゼロベクトルにはならない
    unsafe { Point::uncheck_new(x, y, z) }
}

/// ベクトルを面番号と面UV座標へ射影する。[`face_uv_to_xyz`] の逆変換
pub fn xyz_to_face_uv(p: &Point) -> (u8, f64, f64) {
    let f = face(p);
    let (u, v) = valid_face_xyz_to_uv(f, p);
    (f, u, v)
}

/// 点が面 `face` に射影されることを前提としたUV座標の導出
fn valid_face_xyz_to_uv(face: u8, p: &Point) -> (f64, f64) {
    let (x, y, z) = (p.as_x(), p.as_y(), p.as_z());
    match face {
        0 => (y / x, z / x),
        1 => (-x / y, z / y),
        2 => (-x / z, -y / z),
        3 => (z / x, y / x),
        4 => (z / y, -x / y),
        _ => (-y / z, -x / z),
    }
}

/// ST座標 [0,1] をUV座標 [-1,1] へ変換する。
///
/// 線形変換 `2s-1` ではなく2次の歪み補正を用いる。面の端に向かって
/// セル面積が大きくなるのを抑え、面全体でほぼ均一な面積を保つための変換
pub fn st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

/// UV座標 [-1,1] をST座標 [0,1] へ変換する。[`st_to_uv`] の逆変換
pub fn uv_to_st(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

/// ST座標をIJグリッド座標 [0, 2^30-1] へ量子化する。
///
/// 浮動小数の丸めで [0,1] をわずかに外れた値は有効範囲へクランプされる。
/// 折り返しではなくクランプが要求される境界ポリシー
pub fn st_to_ij(s: f64) -> i64 {
    ((MAX_SIZE as f64 * s).floor() as i64).clamp(0, MAX_SIZE - 1)
}

/// リーフセルのIJ座標から、そのセルが含む最小のST座標を返す。
///
/// 引数は通常の有効範囲の1つ外側 `[0, 2^30]` まで許容される
pub fn ij_to_st_min(i: i64) -> f64 {
    i as f64 / MAX_SIZE as f64
}
