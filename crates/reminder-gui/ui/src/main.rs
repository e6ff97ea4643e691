mod app;
mod components;
mod storage;

const MOUNT_ID: &str = "app";

fn mount_point() -> Option<web_sys::Element> {
  web_sys::window()?
    .document()?
    .get_element_by_id(MOUNT_ID)
}

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let Some(root) = mount_point() else {
    tracing::error!(
      mount_id = MOUNT_ID,
      "page has no mount element; \
       reminder list not started"
    );
    return;
  };

  tracing::info!(
    mount_id = MOUNT_ID,
    "mounting reminder list"
  );
  yew::Renderer::<app::App>::with_root(
    root
  )
  .render();
}
