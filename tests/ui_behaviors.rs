// ============================================================================
// UI BEHAVIORS - Tests de DOM en navegador (wasm-pack test --headless)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{DataTransfer, DragEvent, DragEventInit, Element, Event, File, FilePropertyBag,
    HtmlInputElement};

use library_storefront_ui::behaviors::{
    admin, alerts, cart, forms, uploads,
};
use library_storefront_ui::config::CONFIG;
use library_storefront_ui::models::{PendingCartUpdate, ToastLevel};
use library_storefront_ui::services::{api_client, CartService, InMemoryCartService};
use library_storefront_ui::utils::Debouncer;
use library_storefront_ui::views::toast;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Reemplaza el contenido del body con el fixture del test
fn set_fixture(html: &str) {
    document().body().unwrap().set_inner_html(html);
}

fn query(selector: &str) -> Element {
    document().query_selector(selector).unwrap().unwrap()
}

fn input(selector: &str) -> HtmlInputElement {
    query(selector).dyn_into().unwrap()
}

fn dispatch(target: &Element, event_type: &str) {
    let event = Event::new(event_type).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn make_file(name: &str, content: &str) -> File {
    let parts = js_sys::Array::of1(&content.into());
    File::new_with_str_sequence_and_options(&parts, name, &FilePropertyBag::new()).unwrap()
}

// ---------------------------------------------------------------------------
// Uploads (§4.4)
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn file_display_shows_placeholder_when_empty() {
    set_fixture(r#"<div><input type="file" id="upload"></div>"#);
    uploads::init_file_uploads().unwrap();

    let upload = input("#upload");
    dispatch(&upload, "change");

    let list = query(".file-list");
    assert_eq!(list.children().length(), 1);
    assert_eq!(
        list.text_content().unwrap_or_default().trim(),
        "No files selected"
    );
    // El wrapper quedó marcado como área de subida
    assert!(query("#upload")
        .parent_element()
        .unwrap()
        .class_list()
        .contains("file-upload-area"));
}

#[wasm_bindgen_test]
fn file_display_lists_one_row_per_selected_file() {
    set_fixture(r#"<div><input type="file" id="upload" multiple></div>"#);
    uploads::init_file_uploads().unwrap();

    let upload = input("#upload");
    let transfer = DataTransfer::new().unwrap();
    transfer
        .items()
        .add_with_file(&make_file("cover.png", "x"))
        .unwrap();
    transfer
        .items()
        .add_with_file(&make_file("catalog.csv", "a,b,c"))
        .unwrap();
    upload.set_files(transfer.files().as_ref());

    dispatch(&upload, "change");

    let list = query(".file-list");
    assert_eq!(list.children().length(), 2);
    let text = list.text_content().unwrap_or_default();
    assert!(text.contains("cover.png ("));
    assert!(text.contains("catalog.csv ("));
    assert!(!text.contains("No files selected"));
}

#[wasm_bindgen_test]
fn drop_replaces_selection_and_refreshes_display() {
    set_fixture(r#"<div id="area"><input type="file" id="upload"></div>"#);
    uploads::init_file_uploads().unwrap();

    let area = query("#area");

    // dragover marca el área, dragleave la limpia
    let dragover = DragEvent::new("dragover").unwrap();
    area.dispatch_event(&dragover).unwrap();
    assert!(area.class_list().contains("dragover"));

    let dragleave = DragEvent::new("dragleave").unwrap();
    area.dispatch_event(&dragleave).unwrap();
    assert!(!area.class_list().contains("dragover"));

    // drop con un archivo reemplaza la selección del input
    let transfer = DataTransfer::new().unwrap();
    transfer
        .items()
        .add_with_file(&make_file("receipt.pdf", "pdf"))
        .unwrap();

    let init = DragEventInit::new();
    init.set_data_transfer(Some(&transfer));
    let drop = DragEvent::new_with_event_init_dict("drop", &init).unwrap();
    area.dispatch_event(&drop).unwrap();

    assert!(!area.class_list().contains("dragover"));
    let upload = input("#upload");
    assert_eq!(upload.files().map(|f| f.length()), Some(1));
    let list = query(".file-list");
    assert_eq!(list.children().length(), 1);
    assert!(list
        .text_content()
        .unwrap_or_default()
        .contains("receipt.pdf ("));
}

// ---------------------------------------------------------------------------
// Bulk actions (§4.7)
// ---------------------------------------------------------------------------

const BULK_FIXTURE: &str = r#"
    <input type="checkbox" class="select-all-checkbox">
    <input type="checkbox" class="bulk-checkbox" id="cb1">
    <input type="checkbox" class="bulk-checkbox" id="cb2">
    <input type="checkbox" class="bulk-checkbox" id="cb3">
    <button type="button" class="bulk-action-btn">Bulk Actions</button>
"#;

fn bulk_button() -> Element {
    query(".bulk-action-btn")
}

#[wasm_bindgen_test]
fn bulk_button_follows_checked_count() {
    set_fixture(BULK_FIXTURE);
    admin::init_bulk_actions().unwrap();

    // Sin selección: deshabilitado con etiqueta neutra
    assert!(bulk_button().has_attribute("disabled"));
    assert_eq!(bulk_button().text_content().unwrap(), "Bulk Actions");

    let cb1 = input("#cb1");
    cb1.set_checked(true);
    dispatch(&cb1, "change");
    assert!(!bulk_button().has_attribute("disabled"));
    assert_eq!(bulk_button().text_content().unwrap(), "Apply to 1 items");

    let cb2 = input("#cb2");
    cb2.set_checked(true);
    dispatch(&cb2, "change");
    assert_eq!(bulk_button().text_content().unwrap(), "Apply to 2 items");

    // Desmarcar todo vuelve al estado neutro
    cb1.set_checked(false);
    dispatch(&cb1, "change");
    cb2.set_checked(false);
    dispatch(&cb2, "change");
    assert!(bulk_button().has_attribute("disabled"));
    assert_eq!(bulk_button().text_content().unwrap(), "Bulk Actions");
}

#[wasm_bindgen_test]
fn select_all_forces_every_member_checkbox() {
    set_fixture(BULK_FIXTURE);
    admin::init_bulk_actions().unwrap();

    let select_all = input(".select-all-checkbox");
    select_all.set_checked(true);
    dispatch(&select_all, "change");

    assert!(input("#cb1").checked());
    assert!(input("#cb2").checked());
    assert!(input("#cb3").checked());
    assert_eq!(bulk_button().text_content().unwrap(), "Apply to 3 items");

    select_all.set_checked(false);
    dispatch(&select_all, "change");

    assert!(!input("#cb1").checked());
    assert!(bulk_button().has_attribute("disabled"));
    assert_eq!(bulk_button().text_content().unwrap(), "Bulk Actions");
}

#[wasm_bindgen_test]
fn bulk_wiring_is_a_noop_without_button() {
    set_fixture(r#"<input type="checkbox" class="bulk-checkbox">"#);
    // No debe fallar aunque falte el botón
    admin::init_bulk_actions().unwrap();
}

// ---------------------------------------------------------------------------
// Form guard (§4.5)
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn submit_disables_button_and_shows_processing() {
    set_fixture(r#"<form id="checkout"><button type="submit">Pay now</button></form>"#);
    forms::init_form_guards().unwrap();

    dispatch(&query("#checkout"), "submit");

    let button = query("button[type=\"submit\"]");
    assert!(button.has_attribute("disabled"));
    assert!(button.inner_html().contains("Processing..."));
    assert!(button.inner_html().contains("loading-spinner"));
}

#[wasm_bindgen_test]
fn submit_guard_handles_input_type_submit() {
    set_fixture(r#"<form id="login"><input type="submit" value="Sign in"></form>"#);
    forms::init_form_guards().unwrap();

    dispatch(&query("#login"), "submit");

    let control = input("input[type=\"submit\"]");
    assert!(control.disabled());
    assert_eq!(control.value(), "Processing...");
}

// ---------------------------------------------------------------------------
// Cart (§4.6)
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn cart_badge_reflects_service_count() {
    set_fixture(r#"<span class="cart-count"></span>"#);

    let service = Rc::new(InMemoryCartService::with_items(&[("book-1", 2)]));
    cart::init_cart(service).unwrap();

    let badge = query(".cart-count");
    assert_eq!(badge.text_content().unwrap(), "2");

    let display = badge
        .dyn_ref::<web_sys::HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap();
    assert_eq!(display, "inline");
}

#[wasm_bindgen_test]
fn cart_badge_hidden_when_empty() {
    set_fixture(r#"<span class="cart-count">9</span>"#);

    cart::init_cart(Rc::new(InMemoryCartService::new())).unwrap();

    let badge = query(".cart-count");
    assert_eq!(badge.text_content().unwrap(), "0");
    let display = badge
        .dyn_ref::<web_sys::HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap();
    assert_eq!(display, "none");
}

#[wasm_bindgen_test]
fn quantity_change_reaches_cart_service() {
    set_fixture(
        r#"<input type="number" class="cart-quantity" id="qty" data-item-id="book-9" value="1">"#,
    );

    let service = Rc::new(InMemoryCartService::new());
    cart::init_cart(service.clone()).unwrap();

    let qty = input("#qty");
    qty.set_value("4");
    dispatch(&qty, "change");

    assert_eq!(service.quantity_of("book-9"), Some(4));
    assert_eq!(service.item_count(), 4);
}

// ---------------------------------------------------------------------------
// Debounce (§4.8)
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn debounce_collapses_burst_into_last_call() {
    let calls: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();

    let debouncer = Debouncer::new(100, move |value: u32| {
        sink.borrow_mut().push(value);
    });

    debouncer.call(1);
    debouncer.call(2);
    debouncer.call(3);

    // Nada dispara antes de que venza la ventana
    TimeoutFuture::new(40).await;
    assert!(calls.borrow().is_empty());

    TimeoutFuture::new(200).await;
    assert_eq!(*calls.borrow(), vec![3]);
}

#[wasm_bindgen_test]
async fn debounce_timer_resets_on_each_call() {
    let calls: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();

    let debouncer = Debouncer::new(100, move |value: u32| {
        sink.borrow_mut().push(value);
    });

    debouncer.call(1);
    TimeoutFuture::new(60).await;
    // Segunda llamada dentro de la ventana: rearma el timer
    debouncer.call(2);
    TimeoutFuture::new(60).await;
    assert!(calls.borrow().is_empty());

    TimeoutFuture::new(100).await;
    assert_eq!(*calls.borrow(), vec![2]);
}

// ---------------------------------------------------------------------------
// Alerts (§4.2)
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn alerts_dismiss_after_delay_except_permanent_ones() {
    set_fixture(
        r#"
        <div class="alert" id="flash">Saved</div>
        <div class="alert alert-permanent" id="notice">Maintenance window</div>
        "#,
    );
    let flash = query("#flash");
    let notice = query("#notice");

    alerts::auto_dismiss_alerts().unwrap();

    // Todavía presentes antes del vencimiento
    TimeoutFuture::new(CONFIG.alert_dismiss_ms / 2).await;
    assert!(flash.is_connected());
    assert!(notice.is_connected());

    TimeoutFuture::new(CONFIG.alert_dismiss_ms / 2 + 400).await;
    assert!(!flash.is_connected());
    assert!(notice.is_connected());
}

#[wasm_bindgen_test]
async fn dismissing_an_already_removed_alert_is_a_noop() {
    set_fixture(r#"<div class="alert" id="flash">Saved</div>"#);
    let flash = query("#flash");

    alerts::auto_dismiss_alerts().unwrap();

    // Otro código quita el alert antes del timer
    flash.remove();

    TimeoutFuture::new(CONFIG.alert_dismiss_ms + 400).await;
    // Sin panics ni excepciones; el body sigue utilizable
    assert!(document().body().unwrap().is_connected());
}

// ---------------------------------------------------------------------------
// Toasts (§4.8)
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn toast_creates_shared_container_and_styled_entry() {
    set_fixture("");
    toast::show_toast("Book added to cart", ToastLevel::Success).unwrap();

    let container = query("#toast-container");
    assert!(container.class_list().contains("position-fixed"));
    assert_eq!(container.children().length(), 1);

    let entry = container.first_element_child().unwrap();
    assert!(entry.class_list().contains("toast"));
    assert!(entry.class_list().contains("text-bg-success"));
    assert!(entry
        .text_content()
        .unwrap_or_default()
        .contains("Book added to cart"));

    // Segundo toast reutiliza el contenedor
    toast::show_toast("Payment failed", ToastLevel::Danger).unwrap();
    assert_eq!(query("#toast-container").children().length(), 2);
}

// ---------------------------------------------------------------------------
// Request helper (§4.8)
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn request_helper_marks_requests_as_ajax() {
    let request = api_client::build_request("/v1/cart", "GET", None).unwrap();
    assert_eq!(
        request.headers().get("X-Requested-With").as_deref(),
        Some("XMLHttpRequest")
    );
    // El navegador resuelve la URL relativa contra el origen de la página
    assert!(request.url().ends_with("/v1/cart"));
}

#[wasm_bindgen_test]
fn request_helper_sends_json_bodies_with_content_type() {
    let body = serde_json::json!({ "item_id": "book-9", "quantity": 4 });
    let request = api_client::build_request("/v1/cart", "POST", Some(&body)).unwrap();

    assert_eq!(
        request.headers().get("X-Requested-With").as_deref(),
        Some("XMLHttpRequest")
    );
    assert_eq!(
        request.headers().get("Content-Type").as_deref(),
        Some("application/json")
    );
}

// ---------------------------------------------------------------------------
// Servicio de carrito stub
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn in_memory_cart_overwrites_quantity_per_item() {
    let service = InMemoryCartService::new();
    service.update_item(PendingCartUpdate {
        item_id: "book-1".to_string(),
        quantity: 5,
    });
    service.update_item(PendingCartUpdate {
        item_id: "book-1".to_string(),
        quantity: 2,
    });
    assert_eq!(service.item_count(), 2);
}
