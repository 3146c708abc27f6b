//! Init command implementation.

use super::STATIC_ASSETS;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../marginalia.yml.example");

/// Initialize a new marginalia project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    scaffold_content(root)?;
    install_assets(root)?;

    println!("✓ marginalia initialized in {:?}", root);
    println!("  - Edit marginalia.yml to customize site metadata");
    println!("  - Write posts in content/posts/");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("marginalia.yml");
    if config_path.exists() {
        println!("marginalia.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn scaffold_content(root: &Path) -> Result<()> {
    let posts = root.join("content").join("posts");
    fs::create_dir_all(&posts).with_context(|| format!("Failed to create {:?}", posts))?;

    // Starter post
    let sample = posts.join("welcome.txt");
    if !sample.exists() {
        fs::write(&sample, sample_post())?;
        println!("Created {:?}", sample);
    }

    Ok(())
}

fn install_assets(root: &Path) -> Result<()> {
    let assets = root.join("assets");
    fs::create_dir_all(&assets).with_context(|| format!("Failed to create {:?}", assets))?;

    let favicon = assets.join("favicon.svg");
    if !favicon.exists() {
        let svg = STATIC_ASSETS
            .get_file("favicon.svg")
            .map(|f| f.contents())
            .context("Embedded favicon missing")?;
        fs::write(&favicon, svg).with_context(|| format!("Failed to write {:?}", favicon))?;
        println!("Created {:?}", favicon);
    }

    Ok(())
}

fn sample_post() -> String {
    r#"title: Welcome to marginalia
date: 2025-01-01
---
## Getting started

Write posts as plain `.txt` files in content/posts/. Consecutive lines
join into one paragraph; a blank line starts the next.

- **bold**, __italic__, ==highlighted==, and `inline code`
- sidenotes^[like this one] and margin notes^-[or this one]

1. run `marginalia build`
2. open public/index.html

```
code fences are emitted verbatim
```
"#
    .to_string()
}
