use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUT_DIR: &str = "assets/dist";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    fs::create_dir_all(CSS_OUT_DIR).expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    // main.css pulls in the page and component sheets via @import
    let mut stylesheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(Path::new(CSS_OUT_DIR).join("bundle.css"), css.code)
        .expect("Failed to write bundle.css");
}
