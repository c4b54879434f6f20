mod vec2;
mod vec3;
mod vec4;
#[cfg(test)]
mod tests;

pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
