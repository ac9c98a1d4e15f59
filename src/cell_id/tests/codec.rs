#[cfg(test)]
mod tests {
    use crate::{CellId, Error, MAX_LEVEL, MAX_SIZE, Point};

    ///6面それぞれの面セルが期待するトークンへ符号化されるケース
    #[test]
    fn face_cells_pack_to_expected_tokens() {
        let expected = ["1", "3", "5", "7", "9", "b"];
        for face in 0u8..6 {
            let id = CellId::from_face(face).unwrap();
            assert_eq!(id.to_token(), expected[face as usize]);
            assert_eq!(id.face(), face);
            assert_eq!(id.level(), 0);
            assert!(id.is_face());
            assert!(id.is_valid());
        }
    }

    ///面番号が範囲外のケース
    #[test]
    fn face_out_of_range() {
        assert_eq!(CellId::from_face(6), Err(Error::FaceOutOfRange { face: 6 }));
        assert_eq!(
            CellId::from_face_pos_level(7, 0, 10),
            Err(Error::FaceOutOfRange { face: 7 })
        );
    }

    ///レベルが範囲外のケース
    #[test]
    fn level_out_of_range() {
        assert_eq!(
            CellId::from_face_pos_level(0, 0, 31),
            Err(Error::LevelOutOfRange { level: 31 })
        );
        assert_eq!(CellId::begin(31), Err(Error::LevelOutOfRange { level: 31 }));
        assert_eq!(CellId::end(99), Err(Error::LevelOutOfRange { level: 99 }));
    }

    ///全レベルで指定どおりのレベルのIDが構築されるケース
    #[test]
    fn from_face_pos_level_preserves_level() {
        for level in 0..=MAX_LEVEL {
            let id = CellId::from_face_pos_level(3, 0x1234_5678_9abc_def0, level).unwrap();
            assert_eq!(id.level(), level);
            assert_eq!(id.face(), 3);
            assert!(id.is_valid());
        }
    }

    ///生の値の検証が不正な値を拒否するケース
    #[test]
    fn new_rejects_malformed_raw() {
        assert_eq!(CellId::new(0), Err(Error::InvalidCellId { raw: 0 }));
        //面番号7
        assert!(CellId::new(u64::MAX).is_err());
        //lsbが奇数ビット位置
        assert!(CellId::new(0b10).is_err());

        let raw = CellId::from_face(2).unwrap().as_raw();
        assert_eq!(CellId::new(raw).unwrap().as_raw(), raw);
    }

    ///座標軸方向の点がそれぞれの面のリーフセルへ変換されるケース
    #[test]
    fn from_point_maps_axes_to_faces() {
        let axes = [
            (1.0, 0.0, 0.0, 0u8),
            (0.0, 1.0, 0.0, 1),
            (0.0, 0.0, 1.0, 2),
            (-1.0, 0.0, 0.0, 3),
            (0.0, -1.0, 0.0, 4),
            (0.0, 0.0, -1.0, 5),
        ];
        for (x, y, z, face) in axes {
            let id = CellId::from_point(&Point::new(x, y, z).unwrap());
            assert_eq!(id.face(), face);
            assert_eq!(id.level(), MAX_LEVEL);
            assert!(id.is_leaf());
        }
    }

    ///IJ座標との相互変換が元に戻るケース
    #[test]
    fn face_ij_round_trip() {
        let samples: [(u8, i64, i64); 5] = [
            (0, 0, 0),
            (1, 12345, 67890),
            (2, MAX_SIZE - 1, 0),
            (4, MAX_SIZE / 2, MAX_SIZE / 2),
            (5, MAX_SIZE - 1, MAX_SIZE - 1),
        ];
        for (face, i, j) in samples {
            let id = CellId::from_face_ij(face, i, j);
            assert!(id.is_leaf());
            let (f, di, dj, _) = id.to_face_ij_orientation();
            assert_eq!((f, di, dj), (face, i, j));
        }
    }

    ///面セルの中心が対応する座標軸を向くケース
    #[test]
    fn face_cell_center_points_along_axis() {
        let center = CellId::from_face(0).unwrap().center();
        assert!((center.as_x() - 1.0).abs() < 1e-12);
        assert!(center.as_y().abs() < 1e-12);
        assert!(center.as_z().abs() < 1e-12);
    }

    ///点から作ったリーフセルの中心がその点の近傍にあるケース
    #[test]
    fn leaf_center_is_close_to_source_point() {
        let p = Point::new(0.3, -0.5, 0.8).unwrap().normalize();
        let id = CellId::from_point(&p);
        let center = id.center();
        let dot = p.as_x() * center.as_x() + p.as_y() * center.as_y() + p.as_z() * center.as_z();
        assert!(dot > 1.0 - 1e-12);
        assert!((center.norm() - 1.0).abs() < 1e-15);
    }

    ///UV範囲がセル中心を含むケース
    #[test]
    fn bound_uv_contains_center_uv() {
        let id = CellId::from_point(&Point::new(0.2, 0.7, -0.4).unwrap())
            .parent(8)
            .unwrap();
        let (u, v) = id.center_uv();
        let [[u_lo, u_hi], [v_lo, v_hi]] = id.bound_uv();
        assert!(u_lo < u && u < u_hi);
        assert!(v_lo < v && v < v_hi);
    }
}
