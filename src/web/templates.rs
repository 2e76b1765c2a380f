use askama::Template;

/// Page that boots the WASM bundle. The browser client reads the backend
/// origin from the `backend-url` meta tag.
#[derive(Template)]
#[template(path = "shell.html")]
pub struct ShellTemplate<'a> {
    pub title: &'a str,
    pub backend_url: &'a str,
}
