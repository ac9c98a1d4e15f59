use std::fmt;

use crate::cell_id::CellId;
use crate::cell_id::constants::MAX_LEVEL;

impl fmt::Display for CellId {
    /// `CellId` を文字列形式で表示する。
    ///
    /// 形式は `"{面番号}/{各レベルの子位置}"`。例えばレベル4のセルは
    /// `"3/0123"` のように表示される。無効なIDは `"Invalid: {16進値}"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Invalid: {:x}", self.0);
        }
        write!(f, "{}/", self.face())?;
        for level in 1..=self.level() {
            // is_validを通過しているため子位置の導出は失敗しない
            let pos = (self.0 >> (2 * (MAX_LEVEL - level) as u32 + 1)) & 3;
            write!(f, "{}", pos)?;
        }
        Ok(())
    }
}
