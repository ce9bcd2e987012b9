use crate::constants::PARTICLE_RGB;
use invite_core::Particle;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// 2D canvas painter for the particle field.
pub struct SporeRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl SporeRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    pub fn draw(&self, particles: &[Particle]) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let [r, g, b] = PARTICLE_RGB;
        for p in particles {
            let style = JsValue::from_str(&format!("rgba({}, {}, {}, {})", r, g, b, p.alpha));
            #[allow(deprecated)]
            self.ctx.set_fill_style(&style);
            self.ctx.begin_path();
            _ = self.ctx.arc(
                p.pos.x as f64,
                p.pos.y as f64,
                p.size as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }
    }
}
