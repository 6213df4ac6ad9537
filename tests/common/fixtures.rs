//! Test fixture creation helpers
//!
//! Builds a throwaway project with a `.next`-style build output, an `app/`
//! source tree and the three manifests the analyzer reads.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Global chunk shared by every page
#[allow(dead_code)]
pub const MAIN_CHUNK: &str = "static/chunks/main.js";

/// Chunk only referenced by the blog page
#[allow(dead_code)]
pub const BLOG_CHUNK: &str = "static/chunks/blog.js";

/// Chunk only referenced by the about page
#[allow(dead_code)]
pub const ABOUT_CHUNK: &str = "static/chunks/about.js";

/// A temporary project containing a fake production build
pub struct BuildFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl BuildFixture {
    /// Create an empty project directory
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Create a project with main, blog and about chunks, two pages and
    /// two routes whose sources exist under `app/`
    pub fn standard() -> anyhow::Result<Self> {
        let fixture = Self::new()?;
        fixture.write_chunk(MAIN_CHUNK, &"m".repeat(400))?;
        fixture.write_chunk(BLOG_CHUNK, &"b".repeat(200))?;
        fixture.write_chunk(ABOUT_CHUNK, &"a".repeat(100))?;
        fixture.write_build_manifest(&[MAIN_CHUNK])?;
        fixture.write_app_pages(&[
            ("/blog/page", &[MAIN_CHUNK, BLOG_CHUNK][..]),
            ("/about/page", &[MAIN_CHUNK, ABOUT_CHUNK][..]),
        ])?;
        fixture.write_routes(&[("/blog/page", "/blog"), ("/about/page", "/about")])?;
        fixture.write_source("app/blog/page.tsx")?;
        fixture.write_source("app/about/page.jsx")?;
        Ok(fixture)
    }

    /// Project root
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Build output root
    pub fn build_dir(&self) -> PathBuf {
        self.dir.path().join(".next")
    }

    /// History directory used by default
    pub fn history_dir(&self) -> PathBuf {
        self.dir.path().join(".bundle-delta")
    }

    /// Write a chunk below the build output root
    pub fn write_chunk(&self, relative: &str, contents: &str) -> anyhow::Result<()> {
        write_file(&self.build_dir().join(relative), contents)
    }

    /// Remove a chunk from the build output root
    pub fn remove_chunk(&self, relative: &str) -> anyhow::Result<()> {
        fs::remove_file(self.build_dir().join(relative))?;
        Ok(())
    }

    /// Write `build-manifest.json` with the given global files
    pub fn write_build_manifest(&self, root_main_files: &[&str]) -> anyhow::Result<()> {
        let manifest = json!({ "rootMainFiles": root_main_files, "pages": {} });
        write_file(
            &self.build_dir().join("build-manifest.json"),
            &serde_json::to_string_pretty(&manifest)?,
        )
    }

    /// Write `app-build-manifest.json`
    pub fn write_app_pages(&self, pages: &[(&str, &[&str])]) -> anyhow::Result<()> {
        let pages: serde_json::Map<String, serde_json::Value> = pages
            .iter()
            .map(|(page, files)| (page.to_string(), json!(files)))
            .collect();
        write_file(
            &self.build_dir().join("app-build-manifest.json"),
            &serde_json::to_string_pretty(&json!({ "pages": pages }))?,
        )
    }

    /// Write `app-path-routes-manifest.json`
    pub fn write_routes(&self, routes: &[(&str, &str)]) -> anyhow::Result<()> {
        let routes: serde_json::Map<String, serde_json::Value> = routes
            .iter()
            .map(|(id, route)| (id.to_string(), json!(route)))
            .collect();
        write_file(
            &self.build_dir().join("app-path-routes-manifest.json"),
            &serde_json::to_string_pretty(&routes)?,
        )
    }

    /// Create an (empty) source file relative to the project root
    pub fn write_source(&self, relative: &str) -> anyhow::Result<()> {
        write_file(&self.dir.path().join(relative), "export default function Page() {}\n")
    }

    /// Write any file relative to the project root
    pub fn write_file(&self, relative: &str, contents: &str) -> anyhow::Result<()> {
        write_file(&self.dir.path().join(relative), contents)
    }
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
