/// 球に外接する立方体の面数
pub const NUM_FACES: u8 = 6;

/// 面番号を格納するビット数
pub const FACE_BITS: u32 = 3;

/// 最大の分割レベル。レベル30のセルがリーフセルとなる
pub const MAX_LEVEL: u8 = 30;

/// ヒルベルト曲線位置を格納するビット数
pub const POS_BITS: u32 = 2 * MAX_LEVEL as u32 + 1;

/// 各面のIJグリッドの一辺のセル数 (2^30)
pub const MAX_SIZE: i64 = 1 << MAX_LEVEL;

/// 曲線全体の終端を表すオフセット。advanceのクランプに用いる
pub(crate) const WRAP_OFFSET: u64 = (NUM_FACES as u64) << POS_BITS;

/// ルックアップテーブルが一度に処理するIJのビット数
pub(crate) const LOOKUP_BITS: u32 = 4;

/// orientationビット: IJ軸の入れ替え
pub(crate) const SWAP_MASK: u8 = 0x01;

/// orientationビット: ビット反転
pub(crate) const INVERT_MASK: u8 = 0x02;
