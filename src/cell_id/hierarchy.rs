use crate::cell_id::CellId;
use crate::cell_id::constants::{MAX_LEVEL, WRAP_OFFSET};
use crate::error::Error;

impl CellId {
    /// 指定レベルにおけるこのセルの祖先を返します。
    ///
    /// # バリデーション
    /// - `level` がこのセル自身のレベルより深い場合、[`Error::LevelOutOfRange`] を返します。
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// let id = CellId::from_face_pos_level(1, 0xabcdef, 10).unwrap();
    /// let parent = id.parent(4).unwrap();
    /// assert_eq!(parent.level(), 4);
    /// assert!(parent.contains(&id));
    /// ```
    pub fn parent(&self, level: u8) -> Result<CellId, Error> {
        if level > self.level() {
            return Err(Error::LevelOutOfRange { level });
        }
        Ok(self.parent_unchecked(level))
    }

    /// レベル検証を省いた祖先の導出。レベルが既知の内部経路で用いる
    pub(crate) fn parent_unchecked(&self, level: u8) -> CellId {
        let lsb = Self::lsb_for_level(level);
        CellId((self.0 & lsb.wrapping_neg()) | lsb)
    }

    /// 1つ浅いレベルの親を返します。面セルには親が存在しないため `None` を返します。
    pub fn immediate_parent(&self) -> Option<CellId> {
        if self.is_face() {
            return None;
        }
        let nlsb = self.lsb() << 2;
        Some(CellId((self.0 & nlsb.wrapping_neg()) | nlsb))
    }

    /// ヒルベルト順で `pos` 番目（0..=3）の子セルを返します。
    ///
    /// # バリデーション
    /// - `pos` が3を超える場合、[`Error::ChildPositionOutOfRange`] を返します。
    /// - このセルがリーフの場合、[`Error::LevelOutOfRange`] を返します。
    pub fn child(&self, pos: u8) -> Result<CellId, Error> {
        if pos > 3 {
            return Err(Error::ChildPositionOutOfRange { pos });
        }
        if self.is_leaf() {
            return Err(Error::LevelOutOfRange {
                level: MAX_LEVEL + 1,
            });
        }
        // lsbを1段下げ、中心から子位置ぶんだけずらす
        let lsb = self.lsb() >> 2;
        Ok(CellId(
            self.0
                .wrapping_add((2 * pos as u64 + 1).wrapping_sub(4).wrapping_mul(lsb)),
        ))
    }

    /// 4つの子セルをヒルベルト順で返します。
    ///
    /// 子の位置範囲は親の位置範囲を隙間なく4分割し、この順に連結すると
    /// 親の範囲が正確に復元されます。
    ///
    /// # バリデーション
    /// - このセルがリーフの場合、[`Error::LevelOutOfRange`] を返します。
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// let id = CellId::from_face(0).unwrap();
    /// let children = id.children().unwrap();
    /// assert_eq!(children[0].range_min(), id.range_min());
    /// assert_eq!(children[3].range_max(), id.range_max());
    /// ```
    pub fn children(&self) -> Result<[CellId; 4], Error> {
        if self.is_leaf() {
            return Err(Error::LevelOutOfRange {
                level: MAX_LEVEL + 1,
            });
        }
        let mut lsb = self.lsb();
        let ch0 = CellId(self.0 - lsb + (lsb >> 2));
        lsb >>= 1;
        let ch1 = CellId(ch0.0 + lsb);
        let ch2 = CellId(ch1.0 + lsb);
        let ch3 = CellId(ch2.0 + lsb);
        Ok([ch0, ch1, ch2, ch3])
    }

    /// 子セルのヒルベルト順走査の開始セルを返します。
    /// [`CellId::next`] と [`CellId::child_end`] を組み合わせて走査します
    pub fn child_begin(&self) -> Result<CellId, Error> {
        if self.is_leaf() {
            return Err(Error::LevelOutOfRange {
                level: MAX_LEVEL + 1,
            });
        }
        let lsb = self.lsb();
        Ok(CellId(self.0 - lsb + (lsb >> 2)))
    }

    /// 子セルの走査の終端を返します。返される値は有効なセルとは限りません
    pub fn child_end(&self) -> Result<CellId, Error> {
        if self.is_leaf() {
            return Err(Error::LevelOutOfRange {
                level: MAX_LEVEL + 1,
            });
        }
        let lsb = self.lsb();
        Ok(CellId(self.0 + lsb + (lsb >> 2)))
    }

    /// 指定レベルの子孫走査の開始セルを返します。
    ///
    /// # バリデーション
    /// - `level` がこのセルのレベルより浅い、または30を超える場合、
    ///   [`Error::LevelOutOfRange`] を返します。
    pub fn child_begin_at(&self, level: u8) -> Result<CellId, Error> {
        if level < self.level() || level > MAX_LEVEL {
            return Err(Error::LevelOutOfRange { level });
        }
        Ok(CellId(self.0 - self.lsb() + Self::lsb_for_level(level)))
    }

    /// 指定レベルの子孫走査の終端を返します。返される値は有効なセルとは限りません
    pub fn child_end_at(&self, level: u8) -> Result<CellId, Error> {
        if level < self.level() || level > MAX_LEVEL {
            return Err(Error::LevelOutOfRange { level });
        }
        Ok(CellId(self.0 + self.lsb() + Self::lsb_for_level(level)))
    }

    /// 同一レベルでヒルベルト曲線上の次のセルを返します。
    /// 走査の終端判定は [`CellId::child_end`] などとの比較で行います
    pub fn next(&self) -> CellId {
        CellId(self.0.wrapping_add(self.lsb() << 1))
    }

    /// このセルの部分木に含まれる最小のIDを返します。
    pub fn range_min(&self) -> CellId {
        CellId(self.0 - (self.lsb() - 1))
    }

    /// このセルの部分木に含まれる最大のIDを返します。
    pub fn range_max(&self) -> CellId {
        CellId(self.0 + (self.lsb() - 1))
    }

    /// このセルが `other` を包含するかどうかを返します。
    /// 範囲の整数比較のみで判定され、再帰を要しません
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// let face = CellId::from_face(2).unwrap();
    /// let child = face.child(1).unwrap();
    /// assert!(face.contains(&child));
    /// assert!(!child.contains(&face));
    /// ```
    pub fn contains(&self, other: &CellId) -> bool {
        self.range_min() <= *other && *other <= self.range_max()
    }

    /// このセルが `other` と交差する（どちらかが他方を包含する）かどうかを返します。
    pub fn intersects(&self, other: &CellId) -> bool {
        other.range_min() <= self.range_max() && other.range_max() >= self.range_min()
    }

    /// 同一レベルのまま曲線に沿って `steps` セルぶん移動します。
    ///
    /// 移動は曲線全体の始端と終端でクランプされます。面5の終端を越えて
    /// 折り返したり、面0の始端より前に戻ることはありません
    pub fn advance(&self, steps: i64) -> CellId {
        if steps == 0 {
            return *self;
        }
        let step_shift = 2 * (MAX_LEVEL - self.level()) as u32 + 1;
        let mut steps = steps;
        if steps < 0 {
            let min_steps = -((self.0 >> step_shift) as i64);
            if steps < min_steps {
                steps = min_steps;
            }
        } else {
            let max_steps = ((WRAP_OFFSET + self.lsb() - self.0) >> step_shift) as i64;
            if steps > max_steps {
                steps = max_steps;
            }
        }
        CellId(self.0.wrapping_add((steps as u64) << step_shift))
    }

    /// 指定レベルの祖先が、その親の中で何番目（0..=3）の子かを返します。
    ///
    /// # バリデーション
    /// - `level` が0、またはこのセルのレベルより深い場合、
    ///   [`Error::LevelOutOfRange`] を返します。
    pub fn child_position(&self, level: u8) -> Result<u8, Error> {
        if level == 0 || level > self.level() {
            return Err(Error::LevelOutOfRange { level });
        }
        Ok(((self.0 >> (2 * (MAX_LEVEL - level) as u32 + 1)) & 3) as u8)
    }
}
