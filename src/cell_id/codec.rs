use crate::cell_id::CellId;
use crate::cell_id::constants::{INVERT_MASK, LOOKUP_BITS, MAX_LEVEL, MAX_SIZE, POS_BITS, SWAP_MASK};
use crate::cell_id::lookup;
use crate::geometry::point::Point;
use crate::geometry::projection::{
    face_uv_to_xyz, ij_to_st_min, st_to_ij, st_to_uv, uv_to_st, xyz_to_face_uv,
};

impl CellId {
    /// 球面上の点を含むリーフセルを返します。
    ///
    /// 点は 面UV → 面ST → 面IJ と射影され、ヒルベルト曲線位置へ符号化されます。
    ///
    /// ```
    /// # use cellid_logic::{CellId, MAX_LEVEL, Point};
    /// let id = CellId::from_point(&Point::new(1.0, 0.0, 0.0).unwrap());
    /// assert_eq!(id.face(), 0);
    /// assert_eq!(id.level(), MAX_LEVEL);
    /// assert!(id.is_leaf());
    /// ```
    pub fn from_point(p: &Point) -> CellId {
        let (face, u, v) = xyz_to_face_uv(p);
        let i = st_to_ij(uv_to_st(u));
        let j = st_to_ij(uv_to_st(v));
        Self::from_face_ij(face, i, j)
    }

    /// 面とIJグリッド座標からリーフセルを構築する。
    ///
    /// IとJの各4ビットをヒルベルト曲線位置の8ビットへ表引きで変換し、
    /// orientationを上位チャンクから下位チャンクへ持ち回る
    pub(crate) fn from_face_ij(face: u8, i: i64, j: i64) -> CellId {
        let lookup = lookup::tables();
        let mut n = (face as u64) << (POS_BITS - 1);
        // 隣り合う面は逆向きのヒルベルト曲線を持つ。
        // 全面で一貫した右手系を保つために必要
        let mut bits = (face & SWAP_MASK) as u64;
        let mask = (1u64 << LOOKUP_BITS) - 1;
        for k in (0..8u32).rev() {
            bits += (((i >> (k * LOOKUP_BITS)) as u64) & mask) << (LOOKUP_BITS + 2);
            bits += (((j >> (k * LOOKUP_BITS)) as u64) & mask) << 2;
            bits = lookup.pos[bits as usize] as u64;
            n |= (bits >> 2) << (k * 2 * LOOKUP_BITS);
            bits &= (SWAP_MASK | INVERT_MASK) as u64;
        }
        CellId(n * 2 + 1)
    }

    /// 面の境界をわずかに越えたIJ座標を、正しい隣接面のリーフセルへ変換する。
    ///
    /// 隣接する面同士は座標軸が揃っていないため、単純な剰余による折り返しでは
    /// なく、UV/XYZを経由した再射影で行き先の面を導出する
    pub(crate) fn from_face_ij_wrap(face: u8, i: i64, j: i64) -> CellId {
        // 面のすぐ外側のリーフセル座標までにクランプする
        let i = i.clamp(-1, MAX_SIZE);
        let j = j.clamp(-1, MAX_SIZE);

        // (u,v)は[-1,1]の矩形をわずかに越える位置までに制限する。
        // 再射影の除算で別のリーフセルへずれ込むのを防ぐ
        let scale = 1.0 / MAX_SIZE as f64;
        let limit = 1.0f64.next_up();
        let u = (scale * ((i << 1) + 1 - MAX_SIZE) as f64).clamp(-limit, limit);
        let v = (scale * ((j << 1) + 1 - MAX_SIZE) as f64).clamp(-limit, limit);

        // ここでは線形射影 u=2s-1 とその逆 s=(u+1)/2 を用いる。
        // どの射影でも成り立つため最も単純なものを選ぶ
        let (face, u, v) = xyz_to_face_uv(&face_uv_to_xyz(face, u, v));
        Self::from_face_ij(face, st_to_ij(0.5 * (u + 1.0)), st_to_ij(0.5 * (v + 1.0)))
    }

    /// 同一面に収まる場合は安価な構築、境界を越える場合は再射影付きの構築を選ぶ
    pub(crate) fn from_face_ij_same(face: u8, i: i64, j: i64, same_face: bool) -> CellId {
        if same_face {
            Self::from_face_ij(face, i, j)
        } else {
            Self::from_face_ij_wrap(face, i, j)
        }
    }

    /// IDを面・IJグリッド座標・orientationへ展開する。
    /// [`CellId::from_face_ij`] の逆変換
    pub(crate) fn to_face_ij_orientation(&self) -> (u8, i64, i64, u8) {
        let lookup = lookup::tables();
        let face = self.face();
        let mut bits = (face & SWAP_MASK) as u64;
        let mut i: i64 = 0;
        let mut j: i64 = 0;
        // 最初のチャンクだけ 30 - 7*4 = 2 レベルぶんを処理する
        let mut nbits = MAX_LEVEL as u32 - 7 * LOOKUP_BITS;
        for k in (0..8u32).rev() {
            bits += ((self.0 >> (k * 2 * LOOKUP_BITS + 1)) & ((1u64 << (2 * nbits)) - 1)) << 2;
            bits = lookup.ij[bits as usize] as u64;
            i += ((bits >> (LOOKUP_BITS + 2)) as i64) << (k * LOOKUP_BITS);
            j += (((bits >> 2) & ((1u64 << LOOKUP_BITS) - 1)) as i64) << (k * LOOKUP_BITS);
            bits &= (SWAP_MASK | INVERT_MASK) as u64;
            nbits = LOOKUP_BITS;
        }

        let mut orientation = bits as u8;
        // lsbより下のビット位置の偶奇に応じてswapビットを補正する
        if self.lsb() & 0x1111_1111_1111_1110 != 0 {
            orientation ^= SWAP_MASK;
        }
        (face, i, j, orientation)
    }

    /// セル中心の (si,ti) 座標。リーフセルのIJ座標の2倍の解像度を持つ
    fn face_si_ti(&self) -> (u8, u64, u64) {
        let (face, i, j, _) = self.to_face_ij_orientation();
        let delta: i64 = if self.is_leaf() {
            1
        } else if ((i ^ ((self.0 >> 2) as i64)) & 1) != 0 {
            2
        } else {
            0
        };
        (face, (2 * i + delta) as u64, (2 * j + delta) as u64)
    }

    /// セル中心を通る単位ベクトルを返します。
    pub fn center(&self) -> Point {
        let (face, si, ti) = self.face_si_ti();
        let scale = 0.5 / MAX_SIZE as f64;
        face_uv_to_xyz(
            face,
            st_to_uv(scale * si as f64),
            st_to_uv(scale * ti as f64),
        )
        .normalize()
    }

    /// セル中心のUV座標を返します。
    pub fn center_uv(&self) -> (f64, f64) {
        let (_, si, ti) = self.face_si_ti();
        let scale = 0.5 / MAX_SIZE as f64;
        (st_to_uv(scale * si as f64), st_to_uv(scale * ti as f64))
    }

    /// セルが占めるUV空間上の範囲を `[[u_lo, u_hi], [v_lo, v_hi]]` として返します。
    pub fn bound_uv(&self) -> [[f64; 2]; 2] {
        let (_, i, j, _) = self.to_face_ij_orientation();
        let cell_size = Self::size_ij(self.level());
        let i_lo = i & -cell_size;
        let j_lo = j & -cell_size;
        [
            [
                st_to_uv(ij_to_st_min(i_lo)),
                st_to_uv(ij_to_st_min(i_lo + cell_size)),
            ],
            [
                st_to_uv(ij_to_st_min(j_lo)),
                st_to_uv(ij_to_st_min(j_lo + cell_size)),
            ],
        ]
    }

    /// 指定レベルのセルがIJグリッド上で占める一辺の長さ
    pub(crate) fn size_ij(level: u8) -> i64 {
        1 << (MAX_LEVEL - level) as u32
    }
}
