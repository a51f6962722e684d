//! Compile-time embedded templates.
//!
//! Starter files are loaded from `templates/starter/` via [`include_str!`]. The
//! paths are relative to this source file
//! (`crates/animals-web-core/src/templates/embedded.rs`).

// -------------------------------------------------------
// Fragment templates, one per render style
// -------------------------------------------------------

pub const CARD_LIST_ITEM: &str = "<li class=\"cards__item\"><div class=\"card__title\">{{{name}}}</div>\n\
<p class=\"card__text\"><strong>Diet:</strong> {{{diet}}}<br/>\n\
<strong>Location:</strong> {{{location}}}<br/>\
{{#if animal_type}}\n<strong>Type:</strong> {{{animal_type}}}<br/>{{/if}}\n\
</p></li>";

pub const SIMPLE_LIST_ITEM: &str = "<li>{{{name}}}<br/>\n\
Diet: {{{diet}}}<br/>\n\
Location: {{{location}}}<br/>\
{{#if animal_type}}\nType: {{{animal_type}}}<br/>{{/if}}\n\
</li>";

pub const PLAIN_TEXT: &str = "Name: {{{name}}}\n\
Diet: {{{diet}}}\n\
Location: {{{location}}}\
{{#if animal_type}}\nType: {{{animal_type}}}{{/if}}\n";

// -------------------------------------------------------
// Starter files for `animals-web init`
// -------------------------------------------------------

pub const STARTER_TEMPLATE: &str = include_str!("../../../../templates/starter/animals_template.html");
pub const STARTER_DATA: &str = include_str!("../../../../templates/starter/animals_data.json");
