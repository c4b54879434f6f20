//! A Phong-lit, procedurally-striped demo rendering method built on top of [`vgpu_core`].

pub mod mesh;
pub mod phong;
pub mod shaders;

pub use phong::PhongMethod;
