//! Subcommand handlers
//!
//! Each run loads a library (a JSON snapshot or the sample library) into a
//! fresh store, applies at most one mutation, and renders the result.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context as _};
use tracing::{debug, warn};

use journal_core::{
    build_genre_tree, flatten_tree, format_tree, genre_path, sample_library, ChronoDateFormatter, DateFormatter,
    JournalConfig, LibraryState, LibraryStore, LibraryView, StoreEnv, SystemClock, UnicodeCollator,
};
use journal_domain::{validate_new_book, Book, ContentDraft, Genre, NewBook, SectionDraft, ValidationSeverity};

use crate::cli::{AddBookArgs, AddGenreArgs, BooksArgs, Cli, Command, TreeArgs};

pub fn run(cli: Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let state = load_library(cli.library.as_deref())?;
    let mut session = Session::new(state, config);

    match cli.command {
        Command::Tree(args) => session.tree(&args, out),
        Command::Books(args) => session.books(args, out),
        Command::Path { genre_id } => session.path(&genre_id, out),
        Command::Show { book_id } => session.show(&book_id, out),
        Command::AddGenre(args) => session.add_genre(args, out),
        Command::AddBook(args) => session.add_book(args, out),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<JournalConfig> {
    match path {
        Some(path) => JournalConfig::load(path).with_context(|| format!("load config {}", path.display())),
        None => match JournalConfig::default_path() {
            Some(path) => {
                JournalConfig::load_or_default(&path).with_context(|| format!("load config {}", path.display()))
            }
            None => Ok(JournalConfig::default()),
        },
    }
}

fn load_library(path: Option<&Path>) -> anyhow::Result<LibraryState> {
    let Some(path) = path else {
        debug!("no library given, using the sample library");
        return Ok(sample_library(&SystemClock));
    };
    let json = std::fs::read_to_string(path).with_context(|| format!("read library {}", path.display()))?;
    LibraryState::from_json(&json).with_context(|| format!("parse library {}", path.display()))
}

struct Session {
    store: LibraryStore,
    dates: ChronoDateFormatter,
    collator: UnicodeCollator,
}

impl Session {
    fn new(state: LibraryState, config: JournalConfig) -> Self {
        let dates = ChronoDateFormatter::from_config(&config.display);
        Self {
            store: LibraryStore::with_state(state, StoreEnv::default().with_config(config)),
            dates,
            collator: UnicodeCollator,
        }
    }

    fn tree(&self, args: &TreeArgs, out: &mut dyn Write) -> anyhow::Result<()> {
        let state = self.store.state();
        let roots = build_genre_tree(&state.genres, &state.books, &self.collator);
        if args.ids {
            for (depth, node) in flatten_tree(&roots) {
                writeln!(
                    out,
                    "{}{} ({}) [{}]",
                    "  ".repeat(depth),
                    node.name(),
                    node.total_books,
                    node.id()
                )?;
            }
        } else {
            write!(out, "{}", format_tree(&roots))?;
        }
        Ok(())
    }

    fn books(&mut self, args: BooksArgs, out: &mut dyn Write) -> anyhow::Result<()> {
        if let Some(genre) = args.genre.as_deref() {
            if self.store.state().genre(genre).is_none() {
                bail!("unknown genre {genre:?}");
            }
        }
        self.store.select_genre(args.genre);
        self.store.set_search_term(args.search.unwrap_or_default());

        let view = LibraryView::derive(self.store.state(), &self.collator);
        if !view.breadcrumbs.is_empty() {
            writeln!(out, "{}", breadcrumb(&view.breadcrumbs))?;
        }
        if view.visible_books.is_empty() {
            writeln!(out, "No books found.")?;
            return Ok(());
        }
        for book in &view.visible_books {
            writeln!(
                out,
                "{}  {} by {} [{}]",
                self.dates.format(&book.updated_at),
                book.title,
                book.author,
                book.id
            )?;
        }
        Ok(())
    }

    fn path(&self, genre_id: &str, out: &mut dyn Write) -> anyhow::Result<()> {
        let path = genre_path(genre_id, &self.store.state().genres);
        if path.is_empty() {
            bail!("unknown genre {genre_id:?}");
        }
        writeln!(out, "{}", breadcrumb(&path))?;
        Ok(())
    }

    fn show(&self, book_id: &str, out: &mut dyn Write) -> anyhow::Result<()> {
        let state = self.store.state();
        let Some(book) = state.book(book_id) else {
            bail!("unknown book {book_id:?}");
        };
        self.render_book(state, book, out)
    }

    fn add_genre(&mut self, args: AddGenreArgs, out: &mut dyn Write) -> anyhow::Result<()> {
        let id = self.store.checked_add_genre(&args.name, args.parent)?;
        debug!(genre_id = %id, "genre added");
        if args.write {
            self.write_snapshot(out)
        } else {
            self.tree(&TreeArgs { ids: true }, out)
        }
    }

    fn add_book(&mut self, args: AddBookArgs, out: &mut dyn Write) -> anyhow::Result<()> {
        let sections = args.sections.iter().map(String::as_str).map(parse_section).collect();
        let mut input = NewBook::new(args.title, args.author, args.genre)
            .with_description(args.description)
            .with_tags(args.tags)
            .with_content(ContentDraft::Sections(sections));
        input.cover_color = args.cover_color;

        for issue in validate_new_book(&input)
            .iter()
            .filter(|issue| issue.severity == ValidationSeverity::Warning)
        {
            warn!(field = %issue.field, "{}", issue.message);
        }

        let id = self.store.checked_add_book(input)?;
        if args.write {
            return self.write_snapshot(out);
        }
        let state = self.store.state();
        let book = state.book(&id).context("added book is missing from the library")?;
        self.render_book(state, book, out)
    }

    fn write_snapshot(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        let json = self.store.state().to_json().context("serialize library")?;
        writeln!(out, "{json}")?;
        Ok(())
    }

    fn render_book(&self, state: &LibraryState, book: &Book, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "{}", book.title)?;
        writeln!(out, "by {}", book.author)?;

        let path = genre_path(&book.genre_id, &state.genres);
        if path.is_empty() {
            writeln!(out, "Genre: unknown ({})", book.genre_id)?;
        } else {
            writeln!(out, "Genre: {}", breadcrumb(&path))?;
        }
        if !book.tags.is_empty() {
            writeln!(out, "Tags: {}", book.tags.join(", "))?;
        }
        writeln!(
            out,
            "Added {} · Updated {}",
            self.dates.format(&book.created_at),
            self.dates.format(&book.updated_at)
        )?;
        if !book.description.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", book.description)?;
        }

        let labels = &self.store.env().config.labels;
        for chapter in &book.chapters {
            writeln!(out)?;
            if !chapter.implicit {
                writeln!(out, "## {}", chapter.title)?;
                if !chapter.summary.is_empty() {
                    writeln!(out, "{}", chapter.summary)?;
                }
            }
            for (i, section) in chapter.sections.iter().enumerate() {
                writeln!(out, "{}: {}", labels.section_label(i + 1), section.title)?;
                if !section.summary.is_empty() {
                    writeln!(out, "    {}", section.summary)?;
                }
            }
        }
        Ok(())
    }
}

fn breadcrumb(path: &[&Genre]) -> String {
    path.iter().map(|g| g.name.as_str()).collect::<Vec<_>>().join(" › ")
}

/// `TITLE` or `TITLE: SUMMARY`
fn parse_section(raw: &str) -> SectionDraft {
    match raw.split_once(':') {
        Some((title, summary)) => SectionDraft::new(title.trim(), summary.trim()),
        None => SectionDraft::new(raw.trim(), ""),
    }
}
