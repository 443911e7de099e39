//! Column declarations and the resolved column tree.
//!
//! Callers describe columns as a [`ColumnSpec`] forest. [`ColumnTree::build`]
//! flattens it into an index arena: group widths become the sum of their leaf
//! widths, per-column style overrides are merged with the table defaults into
//! one [`CellStyle`] per node, and header cell heights are normalized so the
//! bottom edge of every leaf lands on the same line.

use crate::cell::CellRenderer;
use crate::types::{CellStyle, Color, FontSpec, FontWeight, TableStyle, TextAlign, TextOverflow};

/// A caller-facing column declaration.
#[derive(Debug, Default)]
pub struct ColumnSpec {
    pub title: String,
    pub data_index: Option<String>,
    pub width: Option<f32>,
    pub children: Vec<ColumnSpec>,
    pub renderer: Option<CellRenderer>,
    pub text_align: Option<TextAlign>,
    pub title_color: Option<Color>,
    pub title_font_size: Option<f32>,
    pub title_font_weight: Option<FontWeight>,
    pub text_color: Option<Color>,
    pub text_font_size: Option<f32>,
    pub text_font_weight: Option<FontWeight>,
    pub text_overflow: Option<TextOverflow>,
}

impl ColumnSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn data_index(mut self, key: impl Into<String>) -> Self {
        self.data_index = Some(key.into());
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn child(mut self, child: ColumnSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Shorthand for a [`CellRenderer::Template`] renderer.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.renderer = Some(CellRenderer::Template(template.into()));
        self
    }

    /// Shorthand for a [`CellRenderer::Compute`] renderer.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&crate::row::Value, &crate::row::Row, usize) -> crate::cell::CellOutput + 'static,
    {
        self.renderer = Some(CellRenderer::Compute(Box::new(f)));
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn title_font_size(mut self, size: f32) -> Self {
        self.title_font_size = Some(size);
        self
    }

    pub fn title_font_weight(mut self, weight: FontWeight) -> Self {
        self.title_font_weight = Some(weight);
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn text_font_size(mut self, size: f32) -> Self {
        self.text_font_size = Some(size);
        self
    }

    pub fn text_font_weight(mut self, weight: FontWeight) -> Self {
        self.text_font_weight = Some(weight);
        self
    }

    pub fn text_overflow(mut self, overflow: TextOverflow) -> Self {
        self.text_overflow = Some(overflow);
        self
    }

    fn merged_style(&self, table: &TableStyle) -> CellStyle {
        // Header titles are bold unless the column says otherwise.
        let title_font = FontSpec {
            size: self.title_font_size.unwrap_or(table.font_size),
            weight: self.title_font_weight.unwrap_or(FontWeight::Bold),
            family: table.font_family.clone(),
        };
        let text_font = FontSpec {
            size: self.text_font_size.unwrap_or(table.font_size),
            weight: self.text_font_weight.unwrap_or(FontWeight::Normal),
            family: table.font_family.clone(),
        };
        CellStyle {
            text_align: self.text_align.unwrap_or(table.text_align),
            title_color: self.title_color.unwrap_or(table.color),
            title_font,
            text_color: self.text_color.unwrap_or(table.color),
            text_font,
            border_color: table.border_color,
            header_bg: table.header_bg_color,
            overflow: self.text_overflow.unwrap_or_default(),
            padding: table.cell_padding,
        }
    }
}

/// One node of the resolved column tree.
#[derive(Debug)]
pub struct ResolvedColumn {
    pub title: String,
    pub data_index: Option<String>,
    pub renderer: Option<CellRenderer>,
    pub style: CellStyle,
    /// Full column width; for groups, the sum of leaf widths underneath.
    pub width: f32,
    /// Header cell height after normalization.
    pub height: f32,
    /// Width available to text, padding removed.
    pub text_width: f32,
    /// 1-based depth from the top row of the header.
    pub depth: usize,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

impl ResolvedColumn {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Index arena over [`ResolvedColumn`] nodes. `leaves` is the preorder list
/// of leaf columns, which is exactly the body cell order left to right.
#[derive(Debug)]
pub struct ColumnTree {
    nodes: Vec<ResolvedColumn>,
    roots: Vec<usize>,
    leaves: Vec<usize>,
}

impl ColumnTree {
    pub fn build(specs: Vec<ColumnSpec>, style: &TableStyle) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            roots: Vec::new(),
            leaves: Vec::new(),
        };
        let header_row = style.resolved_header_row_height();
        tree.roots = specs
            .into_iter()
            .map(|spec| tree.insert(spec, style, header_row, None, 1))
            .collect();
        let roots = tree.roots.clone();
        for root in &roots {
            tree.collect_leaves(*root);
        }
        tree.normalize_header_heights(&roots, header_row, None);
        log::debug!(
            "column tree built: {} nodes, {} leaves, {} header rows",
            tree.nodes.len(),
            tree.leaves.len(),
            tree.max_leaf_depth()
        );
        tree
    }

    fn insert(
        &mut self,
        spec: ColumnSpec,
        style: &TableStyle,
        header_row: f32,
        parent: Option<usize>,
        depth: usize,
    ) -> usize {
        let merged = spec.merged_style(style);
        let width = spec.width.unwrap_or(style.column_width);
        let index = self.nodes.len();
        self.nodes.push(ResolvedColumn {
            title: spec.title,
            data_index: spec.data_index,
            renderer: spec.renderer,
            style: merged,
            width,
            height: header_row,
            text_width: 0.0,
            depth,
            parent,
            children: Vec::new(),
        });
        let children: Vec<usize> = spec
            .children
            .into_iter()
            .map(|child| self.insert(child, style, header_row, Some(index), depth + 1))
            .collect();
        if !children.is_empty() {
            let width: f32 = children
                .iter()
                .flat_map(|&c| self.subtree_leaves(c))
                .map(|leaf| self.nodes[leaf].width)
                .sum();
            self.nodes[index].width = width;
        }
        self.nodes[index].children = children;
        let padding = self.nodes[index].style.padding;
        self.nodes[index].text_width = self.nodes[index].width - padding.left - padding.right;
        index
    }

    fn collect_leaves(&mut self, index: usize) {
        if self.nodes[index].children.is_empty() {
            self.leaves.push(index);
        } else {
            for child in self.nodes[index].children.clone() {
                self.collect_leaves(child);
            }
        }
    }

    /// Leaf node indices under `index`, or `index` itself when it is a leaf.
    fn subtree_leaves(&self, index: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![index];
        while let Some(node) = stack.pop() {
            if self.nodes[node].children.is_empty() {
                out.push(node);
            } else {
                for &child in self.nodes[node].children.iter().rev() {
                    stack.push(child);
                }
            }
        }
        out
    }

    fn subtree_max_depth(&self, index: usize) -> usize {
        self.subtree_leaves(index)
            .into_iter()
            .map(|leaf| self.nodes[leaf].depth)
            .max()
            .unwrap_or(self.nodes[index].depth)
    }

    /// Normalizes header cell heights across one sibling list.
    ///
    /// Without a forced height (top level), the header band is `base` times
    /// the deepest leaf level: leaves span the whole band and groups take an
    /// even share of their own subtree depth. With a forced height, groups
    /// take exactly that height and leaves absorb the remaining levels below
    /// the deepest sibling leaf.
    fn normalize_header_heights(&mut self, siblings: &[usize], base: f32, forced: Option<f32>) {
        let max_depth = siblings
            .iter()
            .flat_map(|&n| self.subtree_leaves(n))
            .map(|leaf| self.nodes[leaf].depth)
            .max()
            .unwrap_or(1);

        if let Some(height) = forced {
            for &node in siblings {
                if self.nodes[node].children.is_empty() {
                    let levels = max_depth - self.nodes[node].depth + 1;
                    self.nodes[node].height = height * levels as f32;
                } else {
                    self.nodes[node].height = height;
                    let children = self.nodes[node].children.clone();
                    self.normalize_header_heights(&children, base, Some(height));
                }
            }
            return;
        }

        if max_depth <= 1 {
            return;
        }
        let band = base * max_depth as f32;
        for &node in siblings {
            if self.nodes[node].children.is_empty() {
                self.nodes[node].height = band;
            } else {
                let height = band / self.subtree_max_depth(node) as f32;
                self.nodes[node].height = height;
                let children = self.nodes[node].children.clone();
                self.normalize_header_heights(&children, base, Some(height));
            }
        }
    }

    pub fn node(&self, index: usize) -> &ResolvedColumn {
        &self.nodes[index]
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Leaf columns in body cell order.
    pub fn leaves(&self) -> &[usize] {
        &self.leaves
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deepest header level, 1-based. Zero for an empty tree.
    pub fn max_leaf_depth(&self) -> usize {
        self.leaves
            .iter()
            .map(|&leaf| self.nodes[leaf].depth)
            .max()
            .unwrap_or(0)
    }

    /// Total header band height.
    pub fn header_height(&self, header_row: f32) -> f32 {
        self.max_leaf_depth() as f32 * header_row
    }

    /// Total table width, the sum of root column widths.
    pub fn table_width(&self) -> f32 {
        self.roots.iter().map(|&r| self.nodes[r].width).sum()
    }
}
