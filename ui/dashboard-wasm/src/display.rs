//! Results panel rendering.
//!
//! Appends one `<section>` per action outcome into `#display-wrapper`:
//! h2 title, h5 description, then one label/value row per result. Errors
//! take the value slot and gain the `error` class.

use crate::dom::{self, Elements};
use gloo_console::error;
use surety_dashboard::display::DisplaySection;

pub fn append_section(els: &Elements, section: &DisplaySection) {
    let sec = dom::create_element("section");

    let title = dom::create_element("h2");
    dom::set_text(&title, &section.title);
    sec.append_child(&title).unwrap();

    let description = dom::create_element("h5");
    dom::set_text(&description, &section.description);
    sec.append_child(&description).unwrap();

    for result in &section.results {
        let row = dom::create_element("div");
        row.set_attribute("class", "row").unwrap();

        let field = dom::create_element("div");
        field.set_attribute("class", "col-sm-4 field").unwrap();
        dom::set_text(&field, &result.label);
        row.append_child(&field).unwrap();

        let value = dom::create_element("div");
        value.set_attribute("class", "col-sm-8 field-value").unwrap();
        match &result.error {
            Some(message) => {
                dom::add_class(&value, "error");
                dom::set_text(&value, message);
                error!("contract call failed:", message.clone());
            }
            None => dom::set_text(&value, &result.value),
        }
        row.append_child(&value).unwrap();

        sec.append_child(&row).unwrap();
    }

    els.display_wrapper.append_child(&sec).unwrap();
}
