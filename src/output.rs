//! Terminal rendering of trees and stats

use crate::tree::{ROOT, SuffixTree, TreeEdge, TreeStats};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print a byte tree to stdout as an indented outline
pub fn print_tree(tree: &SuffixTree<u8>, color: bool, max_nodes: usize) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_tree(&mut stdout, tree, max_nodes)?;
    Ok(())
}

/// Render `tree` depth-first, children in symbol order.
///
/// One line per edge: the label, the target node id, and the target's
/// suffix link if it has one. Stops after `max_nodes` lines and returns
/// the number of lines written.
pub fn write_tree<W: WriteColor>(
    out: &mut W,
    tree: &SuffixTree<u8>,
    max_nodes: usize,
) -> io::Result<usize> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "({ROOT})")?;
    out.reset()?;

    let mut written = 0;
    // Children pushed in reverse so they pop in symbol order
    let mut stack: Vec<(TreeEdge, usize)> = tree
        .edges_from(ROOT)
        .iter()
        .rev()
        .map(|e| (*e, 1))
        .collect();

    while let Some((edge, indent)) = stack.pop() {
        if written == max_nodes {
            let remaining = tree.node_count() - 1 - written;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(out, "... {remaining} more nodes")?;
            out.reset()?;
            break;
        }
        write_edge(out, tree, &edge, indent)?;
        written += 1;

        for child in tree.edges_from(edge.target()).iter().rev() {
            stack.push((*child, indent + 1));
        }
    }

    Ok(written)
}

fn write_edge<W: WriteColor>(
    out: &mut W,
    tree: &SuffixTree<u8>,
    edge: &TreeEdge,
    indent: usize,
) -> io::Result<()> {
    let node = edge.target();

    write!(out, "{:width$}", "", width = indent * 2)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", render_label(tree, edge))?;
    out.reset()?;

    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, " ({node})")?;
    out.reset()?;

    if let Some(link) = tree.suffix_link(node) {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, " -> ({link})")?;
        out.reset()?;
    }
    writeln!(out)
}

/// Escape a byte label, showing the terminator as `$` when it is null
fn render_label(tree: &SuffixTree<u8>, edge: &TreeEdge) -> String {
    let label = tree.label(edge);
    let mut rendered = String::with_capacity(label.len());
    for &b in label {
        if Some(b) == tree.terminator() && b == 0 {
            rendered.push('$');
        } else {
            rendered.extend(std::ascii::escape_default(b).map(char::from));
        }
    }
    rendered
}

/// Print stats as an aligned table
pub fn print_stats(stats: &TreeStats) {
    println!("Suffix Tree Statistics");
    println!("======================");
    println!();
    println!("Input length:     {}", stats.input_len);
    println!("Text length:      {}", stats.text_len);
    println!("Nodes:            {}", stats.nodes);
    println!("  internal:       {}", stats.internal_nodes);
    println!("  leaves:         {}", stats.leaves);
    println!("Edges:            {}", stats.edges);
    println!("Suffix links:     {}", stats.suffix_links);
    println!("Deepest repeat:   {}", stats.max_internal_depth);
}
