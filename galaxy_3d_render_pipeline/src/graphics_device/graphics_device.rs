/// GraphicsDevice trait - long-lived GPU objects and platform capabilities.

use crate::error::Galaxy3dResult;
use crate::graphics_device::{MaterialHandle, TextureDesc, TextureHandle};

/// Host graphics device
pub trait GraphicsDevice {
    /// Whether the platform can copy between render textures directly.
    ///
    /// Queried once per camera renderer and cached.
    fn supports_copy_texture(&self) -> bool;

    /// Create a material from a shader name
    fn create_material(&mut self, shader: &str) -> Galaxy3dResult<MaterialHandle>;

    /// Destroy a material created by this device
    fn destroy_material(&mut self, material: MaterialHandle) -> Galaxy3dResult<()>;

    /// Create a persistent texture
    fn create_texture(&mut self, desc: &TextureDesc) -> Galaxy3dResult<TextureHandle>;

    /// Destroy a texture created by this device
    fn destroy_texture(&mut self, texture: TextureHandle) -> Galaxy3dResult<()>;
}
