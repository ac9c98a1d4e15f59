use std::ops::RangeInclusive;

use rand::Rng;

use crate::cell_id::CellId;
use crate::cell_id::constants::{MAX_LEVEL, NUM_FACES};

impl CellId {
    /// 乱数生成器を用いてランダムな有効セルIDを生成する
    pub fn random_using<R: Rng>(rng: &mut R) -> CellId {
        Self::random_within_using(rng, 0..=MAX_LEVEL)
    }

    /// 指定したレベル範囲内でランダムな有効セルIDを生成する
    pub fn random_within_using<R: Rng>(rng: &mut R, levels: RangeInclusive<u8>) -> CellId {
        let face = rng.random_range(0..NUM_FACES);
        let level = rng.random_range(levels);
        let pos = rng.random::<u64>();
        CellId::from_face_pos_level(face, pos, level)
            .expect("face and level are generated within valid ranges")
    }
}
