use crate::error::Error;

pub mod constants;
pub(crate) mod lookup;

//非公開のモジュール
mod codec;
mod format;
mod hierarchy;
mod neighbor;
mod token;

#[cfg(any(test, feature = "random"))]
mod random;

#[cfg(test)]
mod tests;

use constants::{FACE_BITS, MAX_LEVEL, NUM_FACES, POS_BITS, WRAP_OFFSET};

/// CellIdは球面の階層分割におけるひとつのセルを表す64ビットの識別子です。
///
/// ビットレイアウト（上位から）:
/// - 3ビット: 面番号（0..=5）。球に外接する立方体の6面のいずれか
/// - 61ビット: その面上のヒルベルト曲線位置。最下位の立っているビット（lsb）の
///   位置が分割レベルを符号化し、それより上位のビットが面からセルまでの経路
///   （レベルごとに2ビットの子位置）を表す
///
/// 有効なID同士の整数比較はヒルベルト曲線に沿った順序（面番号が第一キー）と
/// 一致するため、この型はそのまま順序付きインデックスのキーとして使用できます。
///
/// 値0（[`CellId::NONE`]）と全ビット1（[`CellId::SENTINEL`]）は幾何学的な
/// 意味を持たない番兵値で、それぞれ全ての有効なIDより小さく／大きく比較されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) u64);

impl CellId {
    /// 全ての有効なIDより小さい無効値
    pub const NONE: CellId = CellId(0);

    /// 全ての有効なIDより大きい無効値。順序走査の終端マーカーに用いる
    pub const SENTINEL: CellId = CellId(u64::MAX);

    /// 生の64ビット値から [`CellId`] を構築します。
    ///
    /// # バリデーション
    /// - 有効なセルを表さない値の場合、[`Error::InvalidCellId`] を返します。
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// let id = CellId::new(0x1000_0000_0000_0000).unwrap();
    /// assert_eq!(id, CellId::from_face(0).unwrap());
    /// assert!(CellId::new(0).is_err());
    /// ```
    pub fn new(raw: u64) -> Result<CellId, Error> {
        let id = CellId(raw);
        if !id.is_valid() {
            return Err(Error::InvalidCellId { raw });
        }
        Ok(id)
    }

    /// 検証を行わずに [`CellId`] を構築します。
    ///
    /// # 注意
    /// 呼び出し側は、値が有効なセルまたは番兵値であることを保証しなければ
    /// なりません。保証されない場合、レベルや階層の計算が不正な値を返します。
    pub unsafe fn uncheck_new(raw: u64) -> CellId {
        CellId(raw)
    }

    /// 面全体を占めるレベル0のセルを返します。
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// let id = CellId::from_face(0).unwrap();
    /// assert_eq!(id.level(), 0);
    /// assert_eq!(id.to_token(), "1");
    /// ```
    ///
    /// 面番号の範囲外の検知:
    /// ```
    /// # use cellid_logic::{CellId, Error};
    /// assert_eq!(CellId::from_face(6), Err(Error::FaceOutOfRange { face: 6 }));
    /// ```
    pub fn from_face(face: u8) -> Result<CellId, Error> {
        if face >= NUM_FACES {
            return Err(Error::FaceOutOfRange { face });
        }
        Ok(CellId(((face as u64) << POS_BITS) + Self::lsb_for_level(0)))
    }

    /// 面番号・61ビットの曲線位置・レベルから [`CellId`] を構築します。
    /// 位置は指定レベルのセル中心に対応するよう切り詰められます。
    ///
    /// # バリデーション
    /// - `face` が6以上の場合、[`Error::FaceOutOfRange`] を返します。
    /// - `level` が30を超える場合、[`Error::LevelOutOfRange`] を返します。
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// let id = CellId::from_face_pos_level(3, 0x12345678, 20).unwrap();
    /// assert_eq!(id.face(), 3);
    /// assert_eq!(id.level(), 20);
    /// ```
    pub fn from_face_pos_level(face: u8, pos: u64, level: u8) -> Result<CellId, Error> {
        if face >= NUM_FACES {
            return Err(Error::FaceOutOfRange { face });
        }
        if level > MAX_LEVEL {
            return Err(Error::LevelOutOfRange { level });
        }
        let id = CellId(((face as u64) << POS_BITS) + ((pos | 1) & (u64::MAX >> FACE_BITS)));
        Ok(id.parent_unchecked(level))
    }

    /// 指定レベルにおける曲線全体の先頭セルを返します。
    /// [`CellId::end`] との比較で全セルの走査を終了できます
    pub fn begin(level: u8) -> Result<CellId, Error> {
        if level > MAX_LEVEL {
            return Err(Error::LevelOutOfRange { level });
        }
        Ok(CellId(Self::lsb_for_level(level)))
    }

    /// 指定レベルにおける曲線全体の終端を返します。
    /// 返される値は最後のセルの次を指す番兵であり、有効なセルではありません
    pub fn end(level: u8) -> Result<CellId, Error> {
        if level > MAX_LEVEL {
            return Err(Error::LevelOutOfRange { level });
        }
        Ok(CellId(WRAP_OFFSET + Self::lsb_for_level(level)))
    }

    /// このIDが保持している生の64ビット値を返します。
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// このセルが属する面番号（0..=5）を返します。
    pub fn face(&self) -> u8 {
        (self.0 >> POS_BITS) as u8
    }

    /// 面上のヒルベルト曲線位置（下位61ビット）を返します。
    pub fn pos(&self) -> u64 {
        self.0 & (u64::MAX >> FACE_BITS)
    }

    /// このセルの分割レベル（0..=30）を返します。
    ///
    /// ```
    /// # use cellid_logic::{CellId, MAX_LEVEL};
    /// assert_eq!(CellId::from_face(2).unwrap().level(), 0);
    /// let leaf = CellId::from_face_pos_level(2, 999, MAX_LEVEL).unwrap();
    /// assert_eq!(leaf.level(), MAX_LEVEL);
    /// ```
    pub fn level(&self) -> u8 {
        // リーフセルの早期判定
        if self.is_leaf() {
            return MAX_LEVEL;
        }
        MAX_LEVEL - (self.0.trailing_zeros() as u8 >> 1)
    }

    /// このセルが最深レベルのリーフセルかどうかを返します。
    pub fn is_leaf(&self) -> bool {
        self.0 & 1 != 0
    }

    /// このセルが面全体を占めるレベル0のセルかどうかを返します。
    pub fn is_face(&self) -> bool {
        self.0 & (Self::lsb_for_level(0) - 1) == 0
    }

    /// この値が有効なセルを表すかどうかを返します。
    ///
    /// 面番号が6未満で、かつlsbが31箇所の許容ビット位置のいずれかに
    /// あることが条件です。番兵値はどちらも無効です
    pub fn is_valid(&self) -> bool {
        self.face() < NUM_FACES && (self.lsb() & 0x1555_5555_5555_5555 != 0)
    }

    /// 最下位の立っているビットを返す。セル自身の分割単位として機能する
    pub(crate) fn lsb(&self) -> u64 {
        self.0 & self.0.wrapping_neg()
    }

    /// 指定レベルのセルにおけるlsbの値を返す
    pub(crate) fn lsb_for_level(level: u8) -> u64 {
        1u64 << (2 * (MAX_LEVEL - level) as u32)
    }
}
