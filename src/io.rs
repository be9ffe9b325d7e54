//! Edge-list tables in the `source,target,weight[,metadata...]` format.
//!
//! Only the three numeric columns feed the graph; any further columns are kept
//! per edge as string metadata for callers that want to label routes.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::graph::{DirectedGraph, Edge, Weight};
use crate::{Error, Result};

const REQUIRED_COLUMNS: [&str; 3] = ["source", "target", "weight"];

const METERS_PER_SECOND_PER_MPH: f64 = 0.44704;

/// One hop of a reconstructed path, resolved back to the table row it used
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStep<'a> {
    pub from: usize,
    pub to: usize,

    /// Row of the chosen edge in `EdgeList::edges`
    pub edge_index: usize,
    pub weight: i64,
    pub metadata: Option<&'a HashMap<String, String>>,
}

impl<'a> RouteStep<'a> {
    fn field(&self, column: &str) -> Option<&'a str> {
        self.metadata.and_then(|m| m.get(column)).map(String::as_str)
    }

    pub fn street_name(&self) -> Option<&'a str> {
        self.field("street_name")
    }

    /// `length_meters` column when present and numeric, the edge weight otherwise
    pub fn length_meters(&self) -> f64 {
        self.field("length_meters")
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.weight as f64)
    }

    /// Speed limit in mph, from a `maxspeed` value such as `25 mph`
    pub fn speed_mph(&self) -> Option<f64> {
        let value = self.field("maxspeed")?;
        let number = value.strip_suffix("mph")?.trim();
        number.parse().ok().filter(|mph: &f64| *mph > 0.0)
    }

    /// Time to drive the segment at its speed limit; `None` without a usable limit
    pub fn travel_time_seconds(&self) -> Option<f64> {
        let speed = self.speed_mph()? * METERS_PER_SECOND_PER_MPH;
        Some(self.length_meters() / speed)
    }
}

/// Edges parsed from a table, plus whatever metadata columns it carried
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    pub edges: Vec<Edge<i64>>,

    /// Max endpoint + 1, or 0 without edges
    pub vertex_count: usize,

    /// Names of the columns after `weight`, in table order
    pub metadata_columns: Vec<String>,

    /// Non-empty metadata values, parallel to `edges`
    pub metadata: Vec<HashMap<String, String>>,
}

impl EdgeList {
    /// Metadata attached to the edge at `index`
    pub fn metadata_for(&self, index: usize) -> Option<&HashMap<String, String>> {
        self.metadata.get(index)
    }

    /// Resolves each hop of `path` to the lightest matching row (first row on ties),
    /// the same edge `path_weight` charges. `None` if some hop has no edge.
    pub fn route_steps(&self, path: &[usize]) -> Option<Vec<RouteStep<'_>>> {
        path.windows(2)
            .map(|hop| {
                let (from, to) = (hop[0], hop[1]);
                let (edge_index, edge) = self
                    .edges
                    .iter()
                    .enumerate()
                    .filter(|(_, edge)| edge.source == from && edge.target == to)
                    .min_by_key(|(_, edge)| edge.weight)?;

                Some(RouteStep {
                    from,
                    to,
                    edge_index,
                    weight: edge.weight,
                    metadata: self.metadata_for(edge_index),
                })
            })
            .collect()
    }

    /// Builds the graph these edges describe
    pub fn to_graph(&self) -> Result<DirectedGraph<i64>> {
        DirectedGraph::with_vertex_count(self.vertex_count, self.edges.iter().copied())
    }
}

/// Splits one record on commas, honouring double-quoted fields (`""` escapes a quote)
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}

fn parse_field<T: std::str::FromStr>(value: &str, column: &str, line: usize) -> Result<T> {
    value.parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {} value '{}'", column, value),
    })
}

/// Parses an edge table from any buffered reader
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|l| (index + 1, l)));

    let header = loop {
        match lines.next() {
            Some(line) => {
                let (number, text) = line?;
                if !text.trim().is_empty() {
                    break (number, split_record(text.trim_start_matches('\u{feff}')));
                }
            }
            None => return Ok(EdgeList::default()),
        }
    };

    let (header_line, columns) = header;
    let matches_required = columns.len() >= REQUIRED_COLUMNS.len()
        && columns
            .iter()
            .zip(REQUIRED_COLUMNS)
            .all(|(column, required)| column.eq_ignore_ascii_case(required));
    if !matches_required {
        return Err(Error::Parse {
            line: header_line,
            message: format!("expected header starting with 'source,target,weight', got '{}'", columns.join(",")),
        });
    }

    let metadata_columns: Vec<String> = columns[REQUIRED_COLUMNS.len()..].to_vec();
    let mut list = EdgeList {
        metadata_columns,
        ..EdgeList::default()
    };

    for line in lines {
        let (number, text) = line?;
        if text.trim().is_empty() {
            continue;
        }

        let fields = split_record(&text);
        if fields.len() < REQUIRED_COLUMNS.len() {
            return Err(Error::Parse {
                line: number,
                message: format!("expected at least 3 fields, got {}", fields.len()),
            });
        }

        let source: usize = parse_field(&fields[0], "source", number)?;
        let target: usize = parse_field(&fields[1], "target", number)?;
        let weight: i64 = parse_field(&fields[2], "weight", number)?;

        let metadata = list
            .metadata_columns
            .iter()
            .zip(&fields[REQUIRED_COLUMNS.len()..])
            .filter(|(_, value)| !value.is_empty())
            .map(|(column, value)| (column.clone(), value.clone()))
            .collect();

        list.vertex_count = list.vertex_count.max(source.max(target) + 1);
        list.edges.push(Edge::new(source, target, weight));
        list.metadata.push(metadata);
    }

    log::debug!(
        "loaded {} edges over {} vertices ({} metadata columns)",
        list.edges.len(),
        list.vertex_count,
        list.metadata_columns.len()
    );

    Ok(list)
}

/// Opens and parses an edge table file
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    let file = File::open(path.as_ref())?;
    read_edge_list(BufReader::new(file))
}

/// Writes edges as a three-column `source,target,weight` table
pub fn write_edge_list<T, W>(mut writer: T, edges: &[Edge<W>]) -> Result<()>
where
    T: Write,
    W: Weight,
{
    writeln!(writer, "{}", REQUIRED_COLUMNS.join(","))?;
    for edge in edges {
        writeln!(writer, "{},{},{}", edge.source, edge.target, edge.weight)?;
    }
    writer.flush()?;
    Ok(())
}
