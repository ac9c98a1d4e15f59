use crate::cell_id::CellId;
use crate::cell_id::constants::{MAX_LEVEL, MAX_SIZE};
use crate::error::Error;

impl CellId {
    /// 4つの辺を挟んで隣接する同一レベルのセルを返します。
    ///
    /// 辺0,1,2,3はそれぞれ面空間における下・右・上・左方向です。
    /// IまたはJ座標をセル自身の大きさぶんずらし、面の境界を越える場合は
    /// 再射影付きの構築で正しい面へ割り当てます。隣接セルは常に相異なります
    pub fn edge_neighbors(&self) -> [CellId; 4] {
        let level = self.level();
        let size = Self::size_ij(level);
        let (face, i, j, _) = self.to_face_ij_orientation();
        [
            Self::from_face_ij_wrap(face, i, j - size).parent_unchecked(level),
            Self::from_face_ij_wrap(face, i + size, j).parent_unchecked(level),
            Self::from_face_ij_wrap(face, i, j + size).parent_unchecked(level),
            Self::from_face_ij_wrap(face, i - size, j).parent_unchecked(level),
        ]
    }

    /// このセルに最も近い頂点を共有する、指定レベルのセルを列挙します。
    ///
    /// 先頭の要素はこのセル自身の祖先です。立方体の8隅では3セル、
    /// それ以外の頂点では4セルが返されます。
    ///
    /// # バリデーション
    /// - 最も近い頂点を特定するため、`level` はこのセル自身のレベルより
    ///   浅くなければなりません。そうでない場合は [`Error::LevelOutOfRange`] を返します。
    pub fn vertex_neighbors(&self, level: u8) -> Result<Vec<CellId>, Error> {
        if level >= self.level() {
            return Err(Error::LevelOutOfRange { level });
        }
        let (face, i, j, _) = self.to_face_ij_orientation();

        // 対象レベルの半セル幅との論理積で、4頂点のどれに近いかを判定する
        let halfsize = Self::size_ij(level + 1);
        let size = halfsize << 1;
        let (i_offset, i_same) = if i & halfsize != 0 {
            (size, i + size < MAX_SIZE)
        } else {
            (-size, i - size >= 0)
        };
        let (j_offset, j_same) = if j & halfsize != 0 {
            (size, j + size < MAX_SIZE)
        } else {
            (-size, j - size >= 0)
        };

        let mut out = Vec::with_capacity(4);
        out.push(self.parent_unchecked(level));
        out.push(Self::from_face_ij_same(face, i + i_offset, j, i_same).parent_unchecked(level));
        out.push(Self::from_face_ij_same(face, i, j + j_offset, j_same).parent_unchecked(level));
        // I方向とJ方向の隣接セルが両方とも別の面にある場合、この頂点は
        // 立方体の8隅のひとつであり、共有するセルは3つしか存在しない
        if i_same || j_same {
            out.push(
                Self::from_face_ij_same(face, i + i_offset, j + j_offset, i_same && j_same)
                    .parent_unchecked(level),
            );
        }
        Ok(out)
    }

    /// このセルの境界全体に隣接する、指定レベルのセルをすべて列挙します。
    ///
    /// 各辺に沿って隣接レベルのセル幅ずつ進みながら、北・南・東・西と
    /// 対角の隣接セルを収集します。面の境界付近では再射影付きの構築へ
    /// 切り替わります。2つの面の境界上にあるセルは重複して列挙されることがあります。
    ///
    /// # バリデーション
    /// - `level` はこのセル自身のレベル以上かつ30以下でなければなりません。
    ///   そうでない場合は [`Error::LevelOutOfRange`] を返します。
    pub fn all_neighbors(&self, level: u8) -> Result<Vec<CellId>, Error> {
        if level < self.level() || level > MAX_LEVEL {
            return Err(Error::LevelOutOfRange { level });
        }
        let (face, mut i, mut j, _) = self.to_face_ij_orientation();
        let size = Self::size_ij(self.level());
        i &= -size;
        j &= -size;
        let nbr_size = Self::size_ij(level);

        let mut out = Vec::new();
        let mut k = -nbr_size;
        loop {
            let same_face = if k < 0 {
                j + k >= 0
            } else if k >= size {
                j + k < MAX_SIZE
            } else {
                // 北と南の隣接セル
                out.push(
                    Self::from_face_ij_same(face, i + k, j - nbr_size, j - nbr_size >= 0)
                        .parent_unchecked(level),
                );
                out.push(
                    Self::from_face_ij_same(face, i + k, j + size, j + size < MAX_SIZE)
                        .parent_unchecked(level),
                );
                true
            };
            // 東・西・対角の隣接セル
            out.push(
                Self::from_face_ij_same(face, i - nbr_size, j + k, same_face && i - nbr_size >= 0)
                    .parent_unchecked(level),
            );
            out.push(
                Self::from_face_ij_same(face, i + size, j + k, same_face && i + size < MAX_SIZE)
                    .parent_unchecked(level),
            );
            if k >= size {
                break;
            }
            k += nbr_size;
        }
        Ok(out)
    }
}
