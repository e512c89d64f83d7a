use crate::model::ChatEntry;
use web_sys as web;

/// Scrolling, append-only conversation log (`#chat-area`).
#[derive(Clone)]
pub struct ChatView {
    document: web::Document,
    area: Option<web::Element>,
}

impl ChatView {
    pub fn new(document: &web::Document, area_id: &str) -> Self {
        let area = document.get_element_by_id(area_id);
        if area.is_none() {
            log::warn!("[ui] missing #{}; chat log is console-only", area_id);
        }
        Self {
            document: document.clone(),
            area,
        }
    }

    pub fn append(&self, entry: &ChatEntry) {
        log::info!("[chat] {}: {}", entry.sender.css_prefix(), entry.text);
        let Some(area) = &self.area else {
            return;
        };
        let Ok(div) = self.document.create_element("div") else {
            return;
        };
        let sender_class = format!("{}-message", entry.sender.css_prefix());
        _ = div.class_list().add_2("message", &sender_class);
        div.set_text_content(Some(&entry.text));
        _ = area.append_child(&div);
        area.set_scroll_top(area.scroll_height());
    }
}

/// Capture toggle (`#mic-button`); carries the `active` class while listening.
#[derive(Clone)]
pub struct MicButton {
    element: Option<web::Element>,
}

impl MicButton {
    pub fn new(document: &web::Document, id: &str) -> Self {
        Self {
            element: document.get_element_by_id(id),
        }
    }

    pub fn element(&self) -> Option<&web::Element> {
        self.element.as_ref()
    }

    pub fn set_active(&self, active: bool) {
        if let Some(el) = &self.element {
            let cl = el.class_list();
            if active {
                _ = cl.add_1("active");
            } else {
                _ = cl.remove_1("active");
            }
        }
    }
}
