use crate::constants::*;
use crate::dom;
use invite_core::WallCell;
use web_sys as web;

/// Letter tiles mirrored from the core light wall, indexed like its cells.
pub struct WallView {
    letters: Vec<web::Element>,
}

impl WallView {
    /// Empty `wall` and append one tile (letter plus bulb) per cell.
    pub fn build(
        document: &web::Document,
        wall: &web::Element,
        cells: &[WallCell],
    ) -> anyhow::Result<Self> {
        wall.set_inner_html("");
        let mut letters = Vec::with_capacity(cells.len());
        for cell in cells {
            let div = create_div(document, WALL_LETTER_CLASS)?;
            div.set_text_content(Some(&cell.glyph.to_string()));
            let bulb = create_div(document, BULB_CLASS)?;
            dom::set_style(&bulb, BULB_COLOR_VAR, cell.color);
            div.append_child(&bulb).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            wall.append_child(&div).map_err(|e| anyhow::anyhow!("{:?}", e))?;
            letters.push(div);
        }
        Ok(Self { letters })
    }

    pub fn light(&self, lit: Option<usize>) {
        for el in &self.letters {
            _ = el.class_list().remove_1(LIT_CLASS);
        }
        if let Some(el) = lit.and_then(|i| self.letters.get(i)) {
            dom::add_class(el, LIT_CLASS);
        }
    }
}

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    el.set_class_name(class);
    Ok(el)
}
