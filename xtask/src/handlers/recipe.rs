use crate::models::args::{RecipeAction, RecipeArgs, TargetArgs};
use crate::services::utils::{resolve, working_dir};
use anyhow::{Context, Result};
use vio_kernel::process::SystemRunner;
use vio_recipe::{CMake, Layout, Recipe, RecipeConfig, RecipeDriver, Settings};

/// Runs one recipe step.
///
/// # Result
/// Returns `Ok(())` after the requested step completed.
///
/// # Errors
/// Returns an error if the options are invalid or any step (file generation or a
/// `cmake` invocation) fails.
pub fn handle_recipe_command(config: &RecipeConfig, action: RecipeAction) -> Result<()> {
    match action {
        RecipeAction::Options { target } => print_options(&recipe_for(target)?),
        RecipeAction::Generate { args } => {
            let files = driver(config, args)?.generate()?;
            println!("✅ Generated '{}'", files.toolchain.display());
            println!("✅ Generated '{}'", files.dependency_graph.display());
        },
        RecipeAction::Build { args } => {
            driver(config, args)?.build()?;
            println!("✅ Build completed");
        },
        RecipeAction::Package { args } => {
            let driver = driver(config, args)?;
            driver.package()?;
            println!("📦 Packaged into '{}'", driver.layout().package_dir.display());
        },
        RecipeAction::Info { args } => {
            let driver = driver(config, args)?;
            let path = driver.package_info()?;
            let json = serde_json::to_string_pretty(&driver.recipe().package_info())?;
            println!("{json}");
            println!("✅ Written to '{}'", path.display());
        },
        RecipeAction::Create { args } => {
            let driver = driver(config, args)?;
            driver.create()?;
            println!(
                "📦 Created {} in '{}'",
                driver.recipe().metadata().reference(),
                driver.layout().package_dir.display()
            );
        },
    }

    Ok(())
}

fn recipe_for(target: TargetArgs) -> Result<Recipe> {
    let host = Settings::host();
    let settings = Settings {
        os: target.os.unwrap_or(host.os),
        arch: target.arch.unwrap_or(host.arch),
        compiler: target.compiler,
        build_type: target.build_type,
    };
    Recipe::new(settings, &target.options).context("Invalid recipe options")
}

fn driver(config: &RecipeConfig, args: RecipeArgs) -> Result<RecipeDriver<SystemRunner>> {
    let cwd = working_dir()?;
    let layout = Layout {
        source_dir: resolve(&cwd, args.source_dir.as_deref().unwrap_or(&config.source_dir)),
        build_dir: resolve(&cwd, args.build_dir.as_deref().unwrap_or(&config.build_dir)),
        package_dir: resolve(&cwd, args.package_dir.as_deref().unwrap_or(&config.package_dir)),
    };
    let recipe = recipe_for(args.target)?;
    Ok(RecipeDriver::new(recipe, layout, CMake::new(config.cmake.as_str(), SystemRunner)))
}

fn print_options(recipe: &Recipe) {
    let settings = recipe.settings();
    println!("\n{} ({}, {}):\n", recipe.metadata().reference(), settings.os, settings.build_type);
    println!("[options]");
    println!("{}", recipe.options());
    println!("\n[requires]");
    println!("{}", recipe.requirement());
    println!("\n[dependency options]");
    for line in recipe.ffmpeg().qualified(recipe.requirement().name) {
        println!("{line}");
    }
    println!();
}
