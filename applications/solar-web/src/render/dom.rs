//! [`Renderer`] backed by the browser document

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement};

use super::Renderer;

const DEFERRED_SRC_ATTR: &str = "data-src";

#[derive(Error, Debug, Clone)]
pub enum DomError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Query failed: {0}")]
    Query(String),
}

struct DeferredImage {
    element: HtmlImageElement,
    deferred_src: String,
}

/// Renders into the current document
///
/// Images are collected once, at construction, so images added to the page later are
/// left alone.
pub struct DomRenderer {
    document: Document,
    images: Vec<DeferredImage>,
}

impl DomRenderer {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Self::with_document(document)
    }

    pub fn with_document(document: Document) -> Result<Self, DomError> {
        let nodes = document
            .query_selector_all(&format!("img[{}]", DEFERRED_SRC_ATTR))
            .map_err(|e| DomError::Query(format!("{:?}", e)))?;

        let mut images = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<HtmlImageElement>() else {
                continue;
            };
            if let Some(deferred_src) = element.get_attribute(DEFERRED_SRC_ATTR) {
                images.push(DeferredImage {
                    element,
                    deferred_src,
                });
            }
        }

        log::debug!("Found {} deferred images", images.len());

        Ok(Self { document, images })
    }
}

impl Renderer for DomRenderer {
    fn set_text(&mut self, element_id: &str, text: &str) {
        match self.document.get_element_by_id(element_id) {
            Some(element) => element.set_text_content(Some(text)),
            None => log::warn!("Element #{} not found", element_id),
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn deferred_image_sources(&self) -> Vec<String> {
        self.images
            .iter()
            .map(|image| image.deferred_src.clone())
            .collect()
    }

    fn set_image_source(&mut self, index: usize, src: &str) {
        if let Some(image) = self.images.get(index) {
            image.element.set_src(src);
        }
    }
}
