use mp3tagreader::{EditOutcome, TagField};

use structopt::clap::ErrorKind;
use structopt::StructOpt;

use std::io;
use std::path::PathBuf;
use std::process;

const RULE: &str = "----------------------------------------------------";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mp3tagreader",
    about = "View and edit ID3v2.3 tags",
    usage = "mp3tagreader -v <file>\n    mp3tagreader -e <-t|-a|-A|-y|-g|-c> <value> <file>"
)]
struct Opt {
    /// View tags
    #[structopt(short = "v")]
    view: bool,

    /// Edit one tag, chosen by one of the options below
    #[structopt(short = "e")]
    edit: bool,

    /// Title (TIT2)
    #[structopt(short = "t", value_name = "value")]
    title: Option<String>,

    /// Artist (TPE1)
    #[structopt(short = "a", value_name = "value")]
    artist: Option<String>,

    /// Album (TALB)
    #[structopt(short = "A", value_name = "value")]
    album: Option<String>,

    /// Year (TYER)
    #[structopt(short = "y", value_name = "value")]
    year: Option<String>,

    /// Genre (TCON)
    #[structopt(short = "g", value_name = "value")]
    genre: Option<String>,

    /// Comment (COMM)
    #[structopt(short = "c", value_name = "value")]
    comment: Option<String>,

    #[structopt(parse(from_os_str))]
    file: PathBuf,
}

#[derive(Debug)]
enum Command {
    View(PathBuf),
    Edit(TagField, String, PathBuf),
}

impl Opt {
    // exactly one mode, and exactly one tag when editing
    fn command(self) -> Option<Command> {
        let mut values = vec![
            (TagField::Title, self.title),
            (TagField::Artist, self.artist),
            (TagField::Album, self.album),
            (TagField::Year, self.year),
            (TagField::Genre, self.genre),
            (TagField::Comment, self.comment),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)));

        let first = values.next();
        let more = values.next().is_some();

        match (self.view, self.edit, first, more) {
            (true, false, None, _) => Some(Command::View(self.file)),
            (false, true, Some((field, value)), false) => {
                Some(Command::Edit(field, value, self.file))
            }
            _ => None,
        }
    }
}

fn print_help() {
    let _ = Opt::clap().write_help(&mut io::stderr());
    eprintln!();
}

fn view(file: PathBuf) -> i32 {
    match mp3tagreader::read(&file) {
        Ok(tags) => {
            println!("{}", RULE);
            println!("          MP3 TAG READER FOR ID3v2 TAGS");
            println!("{}", RULE);
            print!("{}", tags);
            println!("{}", RULE);
            0
        }
        Err(e) => {
            eprintln!("ERROR: Failed to read ID3 tags: {}", e);
            1
        }
    }
}

fn edit(field: TagField, value: String, file: PathBuf) -> i32 {
    match mp3tagreader::edit(&file, field.as_str(), &value) {
        Ok(EditOutcome::Modified) => {
            println!("Tag edited successfully.");
            0
        }
        // the file was still rewritten, so this is not a failure
        Ok(EditOutcome::NotFound) => {
            eprintln!("Tag {} not found.", field);
            0
        }
        Err(e) => {
            eprintln!("ERROR: Failed to edit tag: {}", e);
            1
        }
    }
}

fn main() {
    env_logger::init();

    let opt = match Opt::from_iter_safe(std::env::args_os()) {
        Ok(opt) => opt,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => {
                print_help();
                process::exit(1);
            }
        },
    };
    log::debug!("{:?}", opt);

    let code = match opt.command() {
        Some(Command::View(file)) => view(file),
        Some(Command::Edit(field, value, file)) => edit(field, value, file),
        None => {
            print_help();
            1
        }
    };
    process::exit(code);
}
