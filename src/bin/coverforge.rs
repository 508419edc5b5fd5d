use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use coverforge::{
    CoverStudio, FontFamily, FontLibrary, PresetCatalog, PresetCategory, ROLE_AUTHOR, ROLE_TITLE,
    Template,
};

#[derive(Parser, Debug)]
#[command(name = "coverforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a cover from a photo and text, writing a PNG.
    Compose(ComposeArgs),
    /// List the built-in preset catalog.
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input photograph (JPEG/PNG/...).
    #[arg(long)]
    image: PathBuf,

    /// Cover title.
    #[arg(long, default_value = "")]
    title: String,

    /// Author byline.
    #[arg(long, default_value = "")]
    author: String,

    /// Template to compose with.
    #[arg(long, value_enum, default_value_t = TemplateChoice::Classic)]
    template: TemplateChoice,

    /// Preset id to seed from instead of the bare template.
    #[arg(long)]
    preset: Option<String>,

    /// Directory with serif.ttf / sans.ttf / display.ttf; system fonts are
    /// probed when omitted.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,

    /// Photo zoom factor (0.5..1.5).
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Photo rotation in degrees (-180..180).
    #[arg(long, default_value_t = 0.0)]
    rotate: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    /// Substring to match against preset names and descriptions.
    #[arg(long)]
    query: Option<String>,

    /// Restrict to one catalog category.
    #[arg(long, value_enum)]
    category: Option<CategoryChoice>,

    /// Emit the catalog as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TemplateChoice {
    Classic,
    Modern,
    Academic,
}

impl From<TemplateChoice> for Template {
    fn from(c: TemplateChoice) -> Self {
        match c {
            TemplateChoice::Classic => Template::Classic,
            TemplateChoice::Modern => Template::Modern,
            TemplateChoice::Academic => Template::Academic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CategoryChoice {
    Magazine,
    Journal,
    Minimal,
}

impl From<CategoryChoice> for PresetCategory {
    fn from(c: CategoryChoice) -> Self {
        match c {
            CategoryChoice::Magazine => PresetCategory::Magazine,
            CategoryChoice::Journal => PresetCategory::Journal,
            CategoryChoice::Minimal => PresetCategory::Minimal,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Presets(args) => cmd_presets(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let mut fonts = FontLibrary::new();
    load_fonts(&mut fonts, args.fonts_dir.as_deref())?;

    let mut studio = CoverStudio::new(fonts);

    if let Some(id) = &args.preset {
        let catalog = PresetCatalog::builtin();
        let preset = catalog
            .by_id(id)
            .with_context(|| format!("unknown preset id '{id}'"))?;
        studio.apply_preset(preset);
    } else {
        studio.set_template(args.template.into());
    }

    studio.texts_mut().set_text(ROLE_TITLE, args.title.as_str());
    studio.texts_mut().set_text(ROLE_AUTHOR, args.author.as_str());
    studio.transform_mut().set_scale(args.zoom);
    studio.transform_mut().set_rotation_deg(args.rotate);

    let photo = std::fs::read(&args.image)
        .with_context(|| format!("read photo '{}'", args.image.display()))?;
    studio.load_photo(&photo)?;

    let raster = studio.export_raster()?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, raster.as_bytes())
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let catalog = PresetCatalog::builtin();
    let mut shown: Vec<_> = match &args.query {
        Some(q) => catalog.search(q),
        None => catalog.presets().iter().collect(),
    };
    if let Some(cat) = args.category {
        let cat: PresetCategory = cat.into();
        shown.retain(|p| p.category == cat);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    for preset in shown {
        println!(
            "{:<20} {:<10} {:<10} {}",
            preset.id,
            preset.template.name(),
            preset.category.name(),
            preset.description
        );
    }
    Ok(())
}

fn load_fonts(fonts: &mut FontLibrary, dir: Option<&Path>) -> anyhow::Result<()> {
    if let Some(dir) = dir {
        for (family, file) in [
            (FontFamily::Serif, "serif.ttf"),
            (FontFamily::SansSerif, "sans.ttf"),
            (FontFamily::Display, "display.ttf"),
        ] {
            let path = dir.join(file);
            if path.exists() {
                fonts.load_family_file(family, &path)?;
            }
        }
        return Ok(());
    }

    // Probe a few common system faces so the demo works out of the box.
    const SERIF: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
        "/usr/share/fonts/TTF/DejaVuSerif.ttf",
        "/Library/Fonts/Times New Roman.ttf",
    ];
    const SANS: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
    ];
    for (family, candidates) in [
        (FontFamily::Serif, SERIF),
        (FontFamily::SansSerif, SANS),
        (FontFamily::Display, SANS),
    ] {
        if let Some(path) = candidates.iter().map(Path::new).find(|p| p.exists()) {
            fonts.load_family_file(family, path)?;
        }
    }
    Ok(())
}
