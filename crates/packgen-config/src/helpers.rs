use std::path::PathBuf;

// Helper defaults
pub(crate) fn default_index_html_template() -> PathBuf {
    PathBuf::from("./public/index.html")
}

pub(crate) fn default_fsharp_entry() -> PathBuf {
    PathBuf::from("./src/App.fsproj")
}

pub(crate) fn default_css_entry() -> PathBuf {
    PathBuf::from("./public/index.css")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("./deploy")
}

pub(crate) fn default_assets_dir() -> PathBuf {
    PathBuf::from("./public")
}

pub(crate) fn default_public_path() -> String {
    "/".to_string()
}

pub(crate) fn default_dev_server_port() -> u16 {
    8080
}

pub(crate) fn default_corejs() -> u32 {
    3
}
