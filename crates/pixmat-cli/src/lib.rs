//! Interactive driver: read a PNG, apply one transform, write `<stem>_new.png`.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use argh::FromArgs;
use pixmat::io::png as P;

/// Error types for the command line driver.
pub mod error;

/// Operation selection and dispatch.
pub mod operation;

/// Terminal questions with re-prompting.
pub mod prompt;

pub use crate::error::CliError;
pub use crate::operation::{Operation, Transform};
pub use crate::prompt::Prompter;

#[derive(FromArgs, Debug)]
/// Apply greyscale, gaussian blur, contrast or luminosity to a PNG image.
/// Missing options are asked for interactively.
pub struct Args {
    /// path to the input PNG image
    #[argh(option, short = 'i')]
    pub input: Option<PathBuf>,

    /// operation: 1/greyscale, 2/blur, 3/contrast, 4/luminosity
    #[argh(option, short = 'o')]
    pub operation: Option<Operation>,

    /// contrast gain m
    #[argh(option)]
    pub gain: Option<f64>,

    /// brightness offset b
    #[argh(option)]
    pub offset: Option<f64>,

    /// side of the gaussian kernel
    #[argh(option, default = "7")]
    pub kernel_size: usize,

    /// sigma of the gaussian kernel
    #[argh(option, default = "10.5")]
    pub sigma: f64,

    /// output path, defaults to <stem>_new.png next to the input
    #[argh(option)]
    pub output: Option<PathBuf>,
}

/// Path of the transformed image: `<stem>_new.png` in the input's directory.
///
/// ```
/// use std::path::Path;
/// use pixmat_cli::output_path;
///
/// assert_eq!(output_path(Path::new("img/cat.png")), Path::new("img/cat_new.png"));
/// ```
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_new.png"))
}

/// Run the driver once, asking `prompter` for anything missing from `args`.
///
/// Returns the path of the written image.
pub fn run<R: BufRead, W: Write>(
    args: Args,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf, CliError> {
    let input: PathBuf = prompter.or_ask(args.input, "Input file path")?;

    let image = P::read_image_png_rgba8(&input)?;
    log::info!("loaded {} image from {}", image.size(), input.display());

    let operation: Operation = prompter.or_ask(
        args.operation,
        "Operation [1] greyscale [2] gaussian blur [3] contrast [4] luminosity",
    )?;

    let transform = match operation {
        Operation::Greyscale => Transform::Greyscale,
        Operation::GaussianBlur => Transform::GaussianBlur {
            kernel_size: args.kernel_size,
            sigma: args.sigma,
        },
        Operation::Contrast => Transform::Contrast {
            gain: prompter.or_ask(args.gain, "Gain m")?,
            offset: prompter.or_ask(args.offset, "Offset b")?,
        },
        Operation::Luminosity => Transform::Luminosity {
            offset: prompter.or_ask(args.offset, "Offset b")?,
        },
    };
    log::info!("applying {operation}: {transform:?}");

    let transformed = transform.apply(&image)?;

    let output = args.output.unwrap_or_else(|| output_path(&input));
    P::write_image_png_rgba8(&output, &transformed)?;

    Ok(output)
}
