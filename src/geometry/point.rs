use crate::error::Error;

/// 球面空間上の点を表す3次元ベクトル型。
///
/// 原点以外の任意のベクトルを保持できる。単位ベクトルであることは要求しないが、
/// セルIDの構築では方向のみが意味を持つ。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// 指定された成分から [`Point`] を構築します。
    ///
    /// # バリデーション
    /// - 全成分が `0.0` の場合、[`Error::ZeroVector`] を返します。
    ///   ゼロベクトルには射影先の面が定義できないためです。
    ///
    /// ```
    /// # use cellid_logic::Point;
    /// let p = Point::new(1.0, 0.0, 0.0).unwrap();
    /// assert_eq!(p.as_x(), 1.0);
    /// ```
    ///
    /// ゼロベクトルの検知:
    /// ```
    /// # use cellid_logic::{Error, Point};
    /// assert_eq!(Point::new(0.0, 0.0, 0.0), Err(Error::ZeroVector));
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Point, Error> {
        if x == 0.0 && y == 0.0 && z == 0.0 {
            return Err(Error::ZeroVector);
        }
        Ok(Point { x, y, z })
    }

    /// 検証を行わずに [`Point`] を構築します。
    ///
    /// # 注意
    /// 呼び出し側は、ベクトルがゼロベクトルでないことを保証しなければなりません。
    /// 保証されない場合、射影を前提とした他の計算が不正な値を返す可能性があります。
    pub unsafe fn uncheck_new(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }

    pub fn as_x(&self) -> f64 {
        self.x
    }

    pub fn as_y(&self) -> f64 {
        self.y
    }

    pub fn as_z(&self) -> f64 {
        self.z
    }

    /// ベクトルの長さを返す
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// 同じ方向を向く単位ベクトルを返す
    pub fn normalize(&self) -> Point {
        let n = self.norm();
        Point {
            x: self.x / n,
            y: self.y / n,
            z: self.z / n,
        }
    }
}
