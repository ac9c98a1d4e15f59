#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{CellId, MAX_LEVEL, MAX_SIZE};

    proptest! {
        ///任意の入力から構築したIDが有効で、面とレベルを保持するケース
        #[test]
        fn from_face_pos_level_properties(
            face in 0u8..6,
            pos in proptest::num::u64::ANY,
            level in 0u8..=MAX_LEVEL,
        ) {
            let id = CellId::from_face_pos_level(face, pos, level).unwrap();
            prop_assert!(id.is_valid());
            prop_assert_eq!(id.face(), face);
            prop_assert_eq!(id.level(), level);
            prop_assert_eq!(CellId::new(id.as_raw()).unwrap(), id);
        }

        ///包含判定がリーフ範囲の比較と一致するケース
        #[test]
        fn contains_matches_range_comparison(
            a_pos in proptest::num::u64::ANY,
            a_level in 0u8..=MAX_LEVEL,
            b_pos in proptest::num::u64::ANY,
            b_level in 0u8..=MAX_LEVEL,
            face in 0u8..6,
        ) {
            let a = CellId::from_face_pos_level(face, a_pos, a_level).unwrap();
            let b = CellId::from_face_pos_level(face, b_pos, b_level).unwrap();
            let expected = a.range_min() <= b.range_min() && b.range_max() <= a.range_max();
            prop_assert_eq!(a.contains(&b), expected);
            prop_assert_eq!(
                a.intersects(&b),
                a.range_min() <= b.range_max() && b.range_min() <= a.range_max()
            );
        }

        ///全ての祖先が子孫を包含するケース
        #[test]
        fn ancestors_contain_descendants(
            face in 0u8..6,
            pos in proptest::num::u64::ANY,
            level in 0u8..=MAX_LEVEL,
        ) {
            let id = CellId::from_face_pos_level(face, pos, level).unwrap();
            for ancestor_level in 0..=level {
                let ancestor = id.parent(ancestor_level).unwrap();
                prop_assert!(ancestor.contains(&id));
                prop_assert!(ancestor.intersects(&id));
                prop_assert_eq!(ancestor.face(), face);
            }
        }

        ///IJ座標との相互変換が任意の座標で元に戻るケース
        #[test]
        fn face_ij_round_trip(
            face in 0u8..6,
            i in 0i64..MAX_SIZE,
            j in 0i64..MAX_SIZE,
        ) {
            let id = CellId::from_face_ij(face, i, j);
            prop_assert!(id.is_leaf());
            let (f, di, dj, _) = id.to_face_ij_orientation();
            prop_assert_eq!((f, di, dj), (face, i, j));
        }

        ///トークンが任意のIDで往復するケース
        #[test]
        fn token_round_trip(
            face in 0u8..6,
            pos in proptest::num::u64::ANY,
            level in 0u8..=MAX_LEVEL,
        ) {
            let id = CellId::from_face_pos_level(face, pos, level).unwrap();
            prop_assert_eq!(CellId::from_token(&id.to_token()).unwrap(), id);
        }

        ///辺隣接が相異なり、かつ対称であるケース
        #[test]
        fn edge_neighbors_distinct_and_symmetric(
            face in 0u8..6,
            pos in proptest::num::u64::ANY,
            level in 0u8..=MAX_LEVEL,
        ) {
            let id = CellId::from_face_pos_level(face, pos, level).unwrap();
            let neighbors = id.edge_neighbors();
            for a in 0..4 {
                prop_assert_eq!(neighbors[a].level(), level);
                prop_assert_ne!(neighbors[a], id);
                for b in (a + 1)..4 {
                    prop_assert_ne!(neighbors[a], neighbors[b]);
                }
                prop_assert!(neighbors[a].edge_neighbors().contains(&id));
            }
        }
    }
}
