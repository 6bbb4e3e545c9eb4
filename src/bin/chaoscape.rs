extern crate chaoscape;
extern crate clap;
extern crate image;

use chaoscape::{ChaosGame, Raster, Registry};
use clap::{App, Arg, ArgMatches};
use image::pnm::PNMEncoder;
use image::pnm::{PNMSubtype, SampleEncoding};
use image::ColorType;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_count(s: &str, err: &str) -> Result<(), String> {
    match u64::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    App::new("chaoscape")
        .version("0.1.0")
        .about("Renders the attractor of an IFS chaos game to a graymap")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x1000")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100000000")
                .validator(|s| validate_count(&s, "Could not parse iteration count"))
                .help("Number of chaos-game iterations to play"),
        )
        .get_matches()
}

fn write_image(outfile: &str, raster: &Raster) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let output = File::create(&path)?;
    let mut encoder =
        PNMEncoder::new(output).with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary));
    // The raster's first subscript is the row, so its width is the
    // image height and vice versa.
    encoder.encode(
        raster.pixels(),
        raster.height() as u32,
        raster.width() as u32,
        ColorType::Gray(8),
    )?;
    Ok(())
}

fn main() {
    let matches = args();
    let (width, height): (u16, u16) =
        parse_pair(matches.value_of(SIZE).unwrap(), 'x').expect("Error parsing image dimensions");
    let iterations = u64::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count");
    let outfile = matches.value_of(OUTPUT).unwrap();

    let raster = Raster::new(width as usize, height as usize);
    let mut game = ChaosGame::new(Registry::default_pool(), raster);
    game.run(iterations);

    if let Err(e) = write_image(outfile, &game.into_raster()) {
        eprintln!("Could not write {}: {}", outfile, e);
        std::process::exit(1);
    }
}
