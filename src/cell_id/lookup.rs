use std::sync::OnceLock;

use crate::cell_id::constants::{INVERT_MASK, LOOKUP_BITS, SWAP_MASK};

/// テーブルの要素数。キーは "iiiijjjjoo" 形式の10ビット
pub(crate) const LOOKUP_LEN: usize = 1 << (2 * LOOKUP_BITS + 2);

/// (I,J,orientation) と (位置,orientation) を相互変換するテーブル。
///
/// `pos` はキー "iiiijjjjoo" を値 "ppppppppoo" へ、`ij` はその逆を引く。
/// 4ビットずつのチャンク処理により、30ビットの座標変換を8回の表引きで行う
pub(crate) struct Lookup {
    pub(crate) pos: [u16; LOOKUP_LEN],
    pub(crate) ij: [u16; LOOKUP_LEN],
}

/// orientationごとのヒルベルト曲線の子セル配置。
/// 値はIJ平面上の位置 `(i << 1) | j`
pub(crate) const POS_TO_IJ: [[u8; 4]; 4] = [
    [0, 1, 3, 2], // 標準順:        (0,0), (0,1), (1,1), (1,0)
    [0, 2, 3, 1], // 軸入れ替え:    (0,0), (1,0), (1,1), (0,1)
    [3, 2, 0, 1], // ビット反転:    (1,1), (1,0), (0,0), (0,1)
    [3, 1, 0, 2], // 入れ替え+反転: (1,1), (0,1), (0,0), (1,0)
];

/// 子の位置ごとにorientationへXORされる変調値
pub(crate) const POS_TO_ORIENTATION: [u8; 4] = [SWAP_MASK, 0, 0, INVERT_MASK | SWAP_MASK];

static LOOKUP: OnceLock<Lookup> = OnceLock::new();

/// 構築済みのテーブルを返す。初回呼び出し時に一度だけ構築され、
/// 以降は読み取り専用の共有データとしてロックなしで参照できる
pub(crate) fn tables() -> &'static Lookup {
    LOOKUP.get_or_init(build)
}

fn build() -> Lookup {
    let mut lookup = Lookup {
        pos: [0; LOOKUP_LEN],
        ij: [0; LOOKUP_LEN],
    };
    // 4種のorientationそれぞれを起点に展開する
    for orientation in [0, SWAP_MASK, INVERT_MASK, SWAP_MASK | INVERT_MASK] {
        fill(&mut lookup, 0, 0, 0, orientation, 0, orientation);
    }
    lookup
}

/// 深さ `LOOKUP_BITS` までヒルベルト曲線を再帰的に展開してテーブルを埋める。
/// orientationは上位チャンクから下位チャンクへ持ち回られる
fn fill(
    lookup: &mut Lookup,
    level: u32,
    i: u16,
    j: u16,
    orig_orientation: u8,
    pos: u16,
    orientation: u8,
) {
    if level == LOOKUP_BITS {
        let ij = (i << LOOKUP_BITS) + j;
        lookup.pos[((ij << 2) + orig_orientation as u16) as usize] = (pos << 2) + orientation as u16;
        lookup.ij[((pos << 2) + orig_orientation as u16) as usize] = (ij << 2) + orientation as u16;
        return;
    }

    let i = i << 1;
    let j = j << 1;
    let pos = pos << 2;
    let r = POS_TO_IJ[orientation as usize];
    for child in 0..4usize {
        fill(
            lookup,
            level + 1,
            i + (r[child] >> 1) as u16,
            j + (r[child] & 1) as u16,
            orig_orientation,
            pos + child as u16,
            orientation ^ POS_TO_ORIENTATION[child],
        );
    }
}
