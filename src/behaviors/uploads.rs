// ============================================================================
// UPLOADS - Drag-and-drop y listado de archivos para inputs de tipo file
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    add_class, append_child, on_drag_event, on_event, query_selector_all, remove_class,
    set_inner_html, ElementBuilder,
};
use crate::utils::format_file_size;

const WRAPPER_CLASS: &str = "file-upload-area";
const DRAGOVER_CLASS: &str = "dragover";
const FILE_LIST_CLASS: &str = "file-list";

/// Envolver cada `input[type="file"]` que aún no tenga área de subida y
/// cablear drag-and-drop + refresco del listado de archivos.
pub fn init_file_uploads() -> Result<(), JsValue> {
    for element in query_selector_all("input[type=\"file\"]")? {
        let input = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => input,
            Err(_) => continue,
        };

        // Ya mejorado (p.ej. inicialización repetida): no tocar
        if input.closest(&format!(".{}", WRAPPER_CLASS))?.is_some() {
            continue;
        }

        let wrapper = match input.parent_element() {
            Some(parent) => parent,
            None => continue,
        };
        add_class(&wrapper, WRAPPER_CLASS)?;

        {
            let area = wrapper.clone();
            on_drag_event(&wrapper, "dragover", move |event| {
                event.prevent_default();
                let _ = add_class(&area, DRAGOVER_CLASS);
            })?;
        }

        {
            let area = wrapper.clone();
            on_drag_event(&wrapper, "dragleave", move |event| {
                event.prevent_default();
                let _ = remove_class(&area, DRAGOVER_CLASS);
            })?;
        }

        {
            let area = wrapper.clone();
            let input_for_drop = input.clone();
            on_drag_event(&wrapper, "drop", move |event| {
                event.prevent_default();
                let _ = remove_class(&area, DRAGOVER_CLASS);

                // Reemplazar la selección del input con los archivos soltados
                if let Some(data_transfer) = event.data_transfer() {
                    input_for_drop.set_files(data_transfer.files().as_ref());
                }
                if let Err(e) = refresh_file_display(&input_for_drop) {
                    log::error!("❌ [UPLOADS] Error refrescando listado: {:?}", e);
                }
            })?;
        }

        {
            let input_for_change = input.clone();
            on_event(&input, "change", move |_| {
                if let Err(e) = refresh_file_display(&input_for_change) {
                    log::error!("❌ [UPLOADS] Error refrescando listado: {:?}", e);
                }
            })?;
        }
    }

    Ok(())
}

/// Reconstruir el listado visible a partir de la selección actual del input.
/// Invariante: el listado refleja exactamente input.files; con cero archivos
/// se muestra el placeholder.
pub fn refresh_file_display(input: &HtmlInputElement) -> Result<(), JsValue> {
    let wrapper = match input.parent_element() {
        Some(parent) => parent,
        None => return Ok(()),
    };

    let list = match wrapper.query_selector(&format!(".{}", FILE_LIST_CLASS))? {
        Some(existing) => existing,
        None => create_file_list_element(&wrapper)?,
    };
    set_inner_html(&list, "");

    let files = input.files();
    let count = files.as_ref().map_or(0, |files| files.length());

    if count == 0 {
        let placeholder = ElementBuilder::new("div")?
            .class("text-muted")
            .text("No files selected")
            .build();
        append_child(&list, &placeholder)?;
        return Ok(());
    }

    if let Some(files) = files {
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                let item = ElementBuilder::new("div")?
                    .class("file-item small text-muted")
                    .text(&format!(
                        "{} ({})",
                        file.name(),
                        format_file_size(file.size())
                    ))
                    .build();
                append_child(&list, &item)?;
            }
        }
    }

    Ok(())
}

fn create_file_list_element(wrapper: &Element) -> Result<Element, JsValue> {
    let list = ElementBuilder::new("div")?
        .class(&format!("{} mt-2", FILE_LIST_CLASS))
        .build();
    append_child(wrapper, &list)?;
    Ok(list)
}
