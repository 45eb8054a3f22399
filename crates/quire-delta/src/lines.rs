//! Operation stream to lines.

use std::collections::HashMap;

use quire_config::SpoilerConfig;
use quire_model::{BlockAttr, Chunk, ImageRef, Line};

use crate::op::{Attributes, DeltaOp, ImageEmbed, Insert};

/// Accumulates inserts into lines.
///
/// Text is buffered as chunks until a newline closes the line; the newline's
/// attributes give the line its block attribute. An image embed stands on its
/// own line and swallows the newline the editor places right after it.
#[derive(Debug)]
pub struct LineBuilder<'a> {
    assets: &'a HashMap<String, String>,
    spoiler: &'a SpoilerConfig,
    lines: Vec<Line>,
    pending: Vec<Chunk>,
    after_embed: bool,
}

impl<'a> LineBuilder<'a> {
    /// Create a builder resolving image sources through `assets`.
    #[must_use]
    pub fn new(assets: &'a HashMap<String, String>, spoiler: &'a SpoilerConfig) -> Self {
        Self {
            assets,
            spoiler,
            lines: Vec::new(),
            pending: Vec::new(),
            after_embed: false,
        }
    }

    /// Feed one operation.
    pub fn push(&mut self, op: &DeltaOp) {
        match &op.insert {
            Insert::Text(text) => self.push_text(text, &op.attributes),
            Insert::Embed(embed) => match &embed.image {
                Some(image) => self.push_image(image),
                None => tracing::debug!("Ignoring non-image embed"),
            },
        }
    }

    /// Finish, closing any unterminated text as a paragraph.
    #[must_use]
    pub fn finish(mut self) -> Vec<Line> {
        if !self.pending.is_empty() {
            let chunks = std::mem::take(&mut self.pending);
            self.lines.push(Line::paragraph(chunks));
        }
        self.lines
    }

    fn push_text(&mut self, text: &str, attributes: &Attributes) {
        for (index, piece) in text.split('\n').enumerate() {
            if index > 0 {
                self.close_line(attributes.block());
            }
            if !piece.is_empty() {
                let chunk = self.chunk(piece, attributes);
                self.pending.push(chunk);
                self.after_embed = false;
            }
        }
    }

    fn chunk(&self, text: &str, attributes: &Attributes) -> Chunk {
        Chunk {
            text: text.to_owned(),
            styles: attributes.styles(),
            link: attributes.link().map(str::to_owned),
            spoiler: attributes.is_spoiler(self.spoiler),
        }
    }

    fn close_line(&mut self, block: BlockAttr) {
        if self.after_embed && self.pending.is_empty() {
            self.after_embed = false;
            return;
        }
        self.after_embed = false;
        let chunks = std::mem::take(&mut self.pending);
        self.lines.push(Line::new(block, chunks));
    }

    fn push_image(&mut self, image: &ImageEmbed) {
        if !self.pending.is_empty() {
            let chunks = std::mem::take(&mut self.pending);
            self.lines.push(Line::paragraph(chunks));
        }
        self.after_embed = true;

        let (asset_id, caption) = match image {
            ImageEmbed::Blot(blot) => (
                blot.asset_id.clone().or_else(|| self.resolve(image.source())),
                blot.caption.clone().filter(|caption| !caption.is_empty()),
            ),
            ImageEmbed::Source(_) => (self.resolve(image.source()), None),
        };

        match asset_id {
            Some(asset_id) if !asset_id.is_empty() => self.lines.push(Line::new(
                BlockAttr::Image(ImageRef { asset_id, caption }),
                Vec::new(),
            )),
            _ => tracing::debug!(
                source = image.source().unwrap_or_default(),
                "Skipping image without resolved asset id"
            ),
        }
    }

    fn resolve(&self, source: Option<&str>) -> Option<String> {
        source.and_then(|source| self.assets.get(source)).cloned()
    }
}

/// Convert an operation stream into lines.
#[must_use]
pub fn delta_to_lines(
    ops: &[DeltaOp],
    assets: &HashMap<String, String>,
    spoiler: &SpoilerConfig,
) -> Vec<Line> {
    let mut builder = LineBuilder::new(assets, spoiler);
    for op in ops {
        builder.push(op);
    }
    let lines = builder.finish();
    tracing::debug!(
        ops = ops.len(),
        lines = lines.len(),
        "Collected lines from operation stream"
    );
    lines
}
