use crate::cell_id::CellId;
use crate::error::Error;

impl CellId {
    /// IDを16進トークンとして符号化します。
    ///
    /// 16文字の小文字16進表現から末尾のゼロニブルを取り除いた文字列を
    /// 返します。値0のIDだけは `"X"` として符号化されます。
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// assert_eq!(CellId::from_face(0).unwrap().to_token(), "1");
    /// assert_eq!(CellId::NONE.to_token(), "X");
    /// ```
    pub fn to_token(&self) -> String {
        let hex = format!("{:016x}", self.0);
        let trimmed = hex.trim_end_matches('0');
        if trimmed.is_empty() {
            return "X".to_string();
        }
        trimmed.to_string()
    }

    /// 16進トークンからIDを復元します。[`CellId::to_token`] の逆変換。
    ///
    /// # バリデーション
    /// - 空文字列・16文字超・16進数以外の文字を含むトークンは
    ///   [`Error::InvalidToken`] を返します。値0を表す `"X"` も復元の
    ///   対象外です。解釈の失敗が正当なゼロIDと混同されることはありません。
    ///
    /// ```
    /// # use cellid_logic::CellId;
    /// let id = CellId::from_face_pos_level(3, 0x12345678, 21).unwrap();
    /// assert_eq!(CellId::from_token(&id.to_token()).unwrap(), id);
    /// assert!(CellId::from_token("X").is_err());
    /// ```
    pub fn from_token(token: &str) -> Result<CellId, Error> {
        if token.is_empty()
            || token.len() > 16
            || !token.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(Error::InvalidToken {
                token: token.to_string(),
            });
        }
        let n = u64::from_str_radix(token, 16).map_err(|_| Error::InvalidToken {
            token: token.to_string(),
        })?;
        // 16文字になるまで右側をゼロ埋めするのと等価
        Ok(CellId(n << (4 * (16 - token.len()) as u32)))
    }
}
