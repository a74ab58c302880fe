/// One acquired swapchain image plus the encoder recording into it.
///
/// Finalize with `Gpu::present` promptly; holding the surface texture blocks
/// acquisition of the next one.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Submits the recorded commands on `queue` and queues the image for display.
    pub(crate) fn finish(self, queue: &wgpu::Queue) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
        } = self;
        drop(view);
        submit_then_present(|| queue.submit(std::iter::once(encoder.finish())), surface_texture);
    }
}

/// Something that can be handed to the display after its commands are submitted.
pub(crate) trait Present {
    fn present(self);
}

impl Present for wgpu::SurfaceTexture {
    fn present(self) {
        wgpu::SurfaceTexture::present(self);
    }
}

/// Runs `submit`, then presents `target`. A dropped surface texture is discarded
/// instead of shown, so every acquired frame goes through here.
pub(crate) fn submit_then_present<P: Present, R>(submit: impl FnOnce() -> R, target: P) {
    submit();
    target.present();
}
