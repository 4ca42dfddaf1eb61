use crate::constants::*;
use crate::dom;
use room_core::ModalId;
use web_sys as web;

#[inline]
fn modal_selector(modal: ModalId) -> &'static str {
    match modal {
        ModalId::About => MODAL_ABOUT_SELECTOR,
        ModalId::Projects => MODAL_PROJECTS_SELECTOR,
        ModalId::Erhu => MODAL_ERHU_SELECTOR,
        ModalId::Contact => MODAL_CONTACT_SELECTOR,
    }
}

pub fn show_modal(document: &web::Document, modal: ModalId) {
    let Some(el) = dom::query(document, modal_selector(modal)) else {
        log::warn!("[modal] no element for {}", modal.as_str());
        return;
    };
    if let Some(backdrop) = dom::query(document, MODAL_OVERLAY_SELECTOR) {
        dom::show(&backdrop);
    }
    dom::show(&el);
}

pub fn hide_modals(document: &web::Document) {
    for modal in [ModalId::About, ModalId::Projects, ModalId::Erhu, ModalId::Contact] {
        if let Some(el) = dom::query(document, modal_selector(modal)) {
            dom::hide(&el);
        }
    }
    if let Some(backdrop) = dom::query(document, MODAL_OVERLAY_SELECTOR) {
        dom::hide(&backdrop);
    }
}

pub fn show_image(document: &web::Document, src: &str, caption: &str) {
    let Some(overlay) = dom::query(document, IMAGE_OVERLAY_SELECTOR) else {
        log::warn!("[modal] image overlay missing");
        return;
    };
    if let Some(img) = document
        .query_selector(IMAGE_OVERLAY_IMG_SELECTOR)
        .ok()
        .flatten()
    {
        let _ = img.set_attribute("src", src);
        let _ = img.set_attribute("alt", caption);
    }
    if let Some(text) = dom::query(document, IMAGE_OVERLAY_TEXT_SELECTOR) {
        text.set_inner_text(caption);
    }
    dom::show(&overlay);
}

pub fn hide_image(document: &web::Document) {
    if let Some(overlay) = dom::query(document, IMAGE_OVERLAY_SELECTOR) {
        dom::hide(&overlay);
    }
}
