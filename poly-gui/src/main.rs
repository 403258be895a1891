use clap::Parser;
use poly_gui::prelude::*;
use poly_gui::render::{Primitive, TextureId};
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ANSI color codes for terminal output
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[derive(Parser)]
#[command(name = "poly-gui")]
#[command(about = "Poly GUI - Lay out a control tree and dump one frame of draw calls", long_about = None)]
struct Cli {
    /// Control tree as JSON; a built-in dialog is used when omitted
    #[arg(short, long)]
    layout: Option<PathBuf>,

    /// Available width handed to the measure pass
    #[arg(long, default_value = "800")]
    width: f32,

    /// Available height handed to the measure pass
    #[arg(long, default_value = "600")]
    height: f32,

    /// Glyph advance of the fixed-cell default font
    #[arg(long, default_value = "8")]
    glyph_width: f32,

    /// Line height of the fixed-cell default font
    #[arg(long, default_value = "12")]
    line_height: f32,

    /// Measure text with the system font database instead
    #[arg(long)]
    system_font: bool,

    /// Simulate the pointer entering the named control
    #[arg(long)]
    hover: Vec<String>,

    /// Disable the named control
    #[arg(long)]
    disable: Vec<String>,
}

const DEMO_LAYOUT: &str = r#"{
    "name": "dialog",
    "position": [400.0, 300.0],
    "size": { "width": 320.0, "height": 160.0 },
    "backgroundRegion": "panel",
    "text": "Save changes?",
    "padding": { "left": 8, "top": 8, "right": 8, "bottom": 8 },
    "children": [
        {
            "name": "save",
            "position": [100.0, 130.0],
            "size": { "width": 96.0, "height": 24.0 },
            "backgroundRegion": "button",
            "text": "Save"
        },
        {
            "name": "cancel",
            "position": [220.0, 130.0],
            "size": { "width": 96.0, "height": 24.0 },
            "backgroundRegion": "button",
            "text": "Cancel"
        }
    ]
}"#;

fn demo_atlas() -> TextureAtlas {
    let mut atlas = TextureAtlas::new("ui", TextureId(0));
    atlas.create_region("panel", Rect::new(0, 0, 128, 128));
    atlas.create_region("button", Rect::new(128, 0, 64, 24));
    atlas.create_region("button-hover", Rect::new(128, 24, 64, 24));
    atlas
}

fn default_font(cli: &Cli) -> Rc<dyn Font> {
    if cli.system_font {
        #[cfg(feature = "system-fonts")]
        return Rc::new(poly_gui::render::CosmicFont::new(cli.line_height / 1.2));
        #[cfg(not(feature = "system-fonts"))]
        warn!("built without system-fonts, falling back to the fixed-cell font");
    }
    Rc::new(MonoFont::new(cli.glyph_width, cli.line_height))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let source = match &cli.layout {
        Some(path) => fs::read_to_string(path)?,
        None => DEMO_LAYOUT.to_string(),
    };
    let properties = ControlProperties::from_json(&source)?;
    let atlas = demo_atlas();

    let mut tree = ControlTree::new();
    let root = tree.load(None, &properties, Some(&atlas))?;
    info!(controls = tree.len(), "loaded layout");

    let hover = Rc::new(
        ControlStyle::new("hover")
            .background_region(atlas.region("button-hover").ok())
            .text_color(Color::rgb(255, 220, 120)),
    );
    let disabled = Rc::new(
        ControlStyle::new("disabled")
            .color(Color::rgb(120, 120, 120))
            .text_color(Color::rgb(90, 90, 90)),
    );

    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if let Some(control) = tree.control_mut(id) {
            control.hover_style = Some(Rc::clone(&hover));
            control.set_disabled_style(Some(Rc::clone(&disabled)));
        }
        stack.extend_from_slice(tree.children_of(id));
    }

    let context = Context::new(default_font(&cli));

    for name in &cli.disable {
        let Some(id) = tree.find_by_name(name) else {
            warn!(name = %name, "no control with that name");
            continue;
        };
        if let Some(control) = tree.control_mut(id) {
            control.set_enabled(false);
        }
    }

    for name in &cli.hover {
        let Some(id) = tree.find_by_name(name) else {
            warn!(name = %name, "no control with that name");
            continue;
        };
        let position = tree.bounding_rectangle(id)?.position();
        if let Some(widget) = tree.get_mut(id) {
            widget.on_pointer_enter(&context, &PointerEventArgs::new(position));
        }
    }

    tree.measure(root, Size2::new(cli.width, cli.height))?;

    let mut list = RenderList::new();
    tree.draw(&context, &mut list, 1.0 / 60.0);

    println!("{BOLD}{CYAN}Frame{RESET} {DIM}({} draw calls){RESET}", list.len());
    for primitive in &list.primitives {
        match primitive {
            Primitive::Region { texture, source, destination, color } => println!(
                "  {GREEN}region{RESET} texture={} src={:?} dst={:?} tint={:?}",
                texture.0,
                source,
                destination,
                color.to_array()
            ),
            Primitive::Text { text, position, color, clip, .. } => println!(
                "  {GREEN}text{RESET}   {:?} at ({}, {}) color={:?} clip={:?}",
                text,
                position.x,
                position.y,
                color.to_array(),
                clip
            ),
        }
    }

    Ok(())
}
