/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 球面上の点と立方体面への射影に関する幾何計算。
mod geometry;

/// セルIDに関する型と演算を定義。
mod cell_id;

pub use cell_id::CellId;
pub use cell_id::constants::{FACE_BITS, MAX_LEVEL, MAX_SIZE, NUM_FACES, POS_BITS};
pub use error::Error;
pub use geometry::point::Point;
pub use geometry::projection::{
    face, face_uv_to_xyz, ij_to_st_min, st_to_ij, st_to_uv, uv_to_st, xyz_to_face_uv,
};
