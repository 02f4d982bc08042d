use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Value, json};

fn write_json(path: &Path, value: &Value) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

fn style(bg: &str, text: &str) -> Value {
    json!({
        "background-color": bg,
        "color": text,
        "font-family": "Helvetica, Arial, sans-serif",
        "font-size": "16px",
        "text-align": "left"
    })
}

/// White page, dark text, a red nav and a blue link
fn light_page() -> Value {
    json!({
        "body": style("#ffffff", "#000000"),
        "nav": style("#ffffff", "#ff0000"),
        "a": style("#ffffff", "#0000ee"),
        "h1": style("#ffffff", "#222"),
        "footer": style("#333333", "#ffffff")
    })
}

/// Dark theme reusing a small palette
fn dark_page() -> Value {
    json!({
        "body": style("#121212", "#e0e0e0"),
        "nav": style("#1f1f1f", "#bb86fc"),
        "a": style("#121212", "#03dac6"),
        "link": style("#121212", "#bb86fc"),
        "button": style("#bb86fc", "#000000")
    })
}

/// Computed styles as browsers report them: rgba everywhere
fn rgba_page() -> Value {
    json!({
        "body": style("rgba(255, 255, 255, 1)", "rgba(33, 33, 33, 1)"),
        "nav": style("rgba(0, 0, 0, 0)", "rgba(33, 33, 33, 1)"),
        "p": style("transparent", "rgb(33, 33, 33)")
    })
}

/// Stored scrape record with the element map serialized as a string
fn scrape_record() -> Value {
    json!({
        "url": "https://example.com/",
        "elements_properties": light_page().to_string(),
        "body_content": "Example Domain"
    })
}

fn main() -> std::io::Result<()> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    write_json(&dir.join("light.json"), &light_page())?;
    write_json(&dir.join("dark.json"), &dark_page())?;
    write_json(&dir.join("rgba.json"), &rgba_page())?;
    write_json(&dir.join("record.json"), &scrape_record())?;

    println!("Generated: light.json, dark.json, rgba.json, record.json");
    Ok(())
}
