//! TypeScript declaration builders for the generated models file.
//!
//! Each builder renders to code fragments through [`Renderable`], so the
//! emitter composes them without tracking indentation.
//!
//! [`Renderable`]: mstgen_codegen::builder::Renderable

mod consts;
mod convert;
mod enums;
mod imports;
mod model;

pub use consts::Const;
pub use convert::{ConvertClass, Method};
pub use enums::EnumDecl;
pub use imports::Import;
pub use model::{Model, ModelProperty};
