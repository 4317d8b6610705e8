//! Preview surface with scoped style-block injection.
//!
//! Responsibilities:
//! - Own the registry of style blocks attached to one preview surface.
//! - Hand out `StyleGuard`s that detach their block when dropped.
//! - Render markup against every attached block in attach order.
//!
//! Does NOT handle:
//! - Deciding when to swap blocks (see `app::editor`).
//!
//! Invariants:
//! - A block is attached iff a live `StyleGuard` refers to it.
//! - Dropping a guard after its surface is gone is a no-op.
//! - The registry is single-threaded (`Rc<RefCell<..>>`); the preview never
//!   leaves the UI thread.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use cheatsheet_config::Theme;
use ratatui::text::Text;

use super::css::Stylesheet;
use super::render::render_markup;

/// Identifier of an attached style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleBlockId(u64);

#[derive(Debug, Default)]
struct StyleRegistry {
    next_id: u64,
    blocks: Vec<(StyleBlockId, Stylesheet)>,
}

impl StyleRegistry {
    fn attach(&mut self, sheet: Stylesheet) -> StyleBlockId {
        self.next_id += 1;
        let id = StyleBlockId(self.next_id);
        self.blocks.push((id, sheet));
        tracing::trace!(block = id.0, active = self.blocks.len(), "Attached style block");
        id
    }

    fn detach(&mut self, id: StyleBlockId) {
        let before = self.blocks.len();
        self.blocks.retain(|(block, _)| *block != id);
        if self.blocks.len() != before {
            tracing::trace!(block = id.0, active = self.blocks.len(), "Detached style block");
        }
    }
}

/// A render target that style blocks can be scoped to.
#[derive(Debug, Default)]
pub struct PreviewSurface {
    registry: Rc<RefCell<StyleRegistry>>,
}

impl PreviewSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `css` and attach it to this surface until the guard is dropped.
    pub fn inject(&self, css: &str) -> StyleGuard {
        let id = self.registry.borrow_mut().attach(Stylesheet::parse(css));
        StyleGuard {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Number of style blocks currently attached.
    pub fn active_blocks(&self) -> usize {
        self.registry.borrow().blocks.len()
    }

    /// Ids of the attached blocks in attach order.
    pub fn block_ids(&self) -> Vec<StyleBlockId> {
        self.registry.borrow().blocks.iter().map(|(id, _)| *id).collect()
    }

    /// Render `html` against every attached block.
    pub fn render(&self, html: &str, theme: &Theme) -> Text<'static> {
        let registry = self.registry.borrow();
        let sheets: Vec<&Stylesheet> = registry.blocks.iter().map(|(_, sheet)| sheet).collect();
        render_markup(html, &sheets, theme)
    }
}

/// Keeps one style block attached to a `PreviewSurface`.
pub struct StyleGuard {
    registry: Weak<RefCell<StyleRegistry>>,
    id: StyleBlockId,
}

impl StyleGuard {
    pub fn id(&self) -> StyleBlockId {
        self.id
    }
}

impl fmt::Debug for StyleGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleGuard").field("id", &self.id).finish()
    }
}

impl Drop for StyleGuard {
    fn drop(&mut self) {
        // Must not panic: skip if the surface is gone or mid-borrow.
        if let Some(shared) = self.registry.upgrade()
            && let Ok(mut registry) = shared.try_borrow_mut()
        {
            registry.detach(self.id);
        }
    }
}
