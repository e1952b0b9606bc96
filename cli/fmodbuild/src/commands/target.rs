//! `fmodbuild target` — platform listing and description.

use anyhow::{bail, Result};

use fmodbuild_targets::{naming_parts, LinkKind, TargetPlatform};

/// List all platforms in the model and whether binaries ship for them.
pub fn list() -> Result<()> {
    println!("Platforms:");
    println!();
    for platform in TargetPlatform::all() {
        match naming_parts(*platform) {
            Ok(parts) => {
                let kind = match parts.link_kind() {
                    LinkKind::Dynamic => "dynamic",
                    LinkKind::Static => "static",
                };
                println!("  {:<10} {kind:<8} Lib/{}", platform.to_string(), platform.lib_dir_name());
            }
            Err(_) => {
                println!("  {:<10} unsupported (no prebuilt binaries)", platform.to_string());
            }
        }
    }
    println!();
    println!("Use 'fmodbuild target describe <name>' for details.");
    Ok(())
}

/// Describe one platform's naming rules in detail.
pub fn describe(name: &str, format: Option<&str>) -> Result<()> {
    let platform: TargetPlatform = match name.parse() {
        Ok(p) => p,
        Err(_) => bail!("unknown target: '{name}'. Use 'fmodbuild target list' to see targets."),
    };
    let parts = naming_parts(platform)?;

    if format == Some("toml") {
        print!("{}", toml::to_string_pretty(&parts)?);
        return Ok(());
    }

    println!("=== Platform: {platform} ===");
    println!("Binary dir:        Lib/{}", platform.lib_dir_name());
    println!(
        "Library prefix:    {}",
        if parts.lib_prefix.is_empty() {
            "(none)"
        } else {
            parts.lib_prefix
        }
    );
    if !parts.mid_name.is_empty() {
        println!("Bit-width suffix:  {}", parts.mid_name);
    }
    println!("Link extension:    {}", parts.link_extension);
    match parts.runtime_extension {
        Some(ext) => println!("Runtime extension: {ext}"),
        None => println!("Runtime extension: (static link, nothing packaged)"),
    }
    println!("Delay-load:        {}", if parts.delay_load { "yes" } else { "no" });
    println!(
        "Deploy manifest:   {}",
        if parts.writes_deploy_manifest { "yes" } else { "no" }
    );

    Ok(())
}
