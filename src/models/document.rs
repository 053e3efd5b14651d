// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! In-memory page document: a body of elements addressed by stable ids.
//!
//! The host renders whatever the body holds; guard logic only inserts and
//! removes elements. Forms and file inputs live in the same tree so they can
//! be handed to the guard by id instead of being looked up by position.

use anyhow::{Result, anyhow, bail};

use crate::models::selected_file::SelectedFile;

/// Stable identifier of an element within one [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

/// What an element is, beyond its class name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// Submittable form; `action` names the submission target.
    Form { action: String },
    /// Native file picker control and its current selection.
    FileInput { files: Vec<SelectedFile> },
    /// Generic block (flash banners, loader).
    Container,
    /// Indeterminate progress indicator.
    Spinner,
    /// Paragraph of text.
    Label,
}

/// Node of the document tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub class_name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Whether the space-separated class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name.split_whitespace().any(|c| c == class)
    }

    fn find(&self, id: ElementId) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    fn collect_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, out);
        }
    }
}

/// Page document with a single body.
#[derive(Debug, Default)]
pub struct Document {
    body: Vec<Element>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element with a fresh id.
    pub fn create_element(
        &mut self,
        kind: ElementKind,
        class_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Element {
        self.next_id += 1;
        Element {
            id: ElementId(self.next_id),
            kind,
            class_name: class_name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Top-level body children in document order.
    pub fn body(&self) -> &[Element] {
        &self.body
    }

    /// Insert as the first child of the body.
    pub fn prepend(&mut self, element: Element) -> ElementId {
        let id = element.id;
        self.body.insert(0, element);
        id
    }

    /// Insert as the last child of the body.
    pub fn append(&mut self, element: Element) -> ElementId {
        let id = element.id;
        self.body.push(element);
        id
    }

    /// Insert as the last child of `parent`.
    pub fn append_child(&mut self, parent: ElementId, element: Element) -> Result<ElementId> {
        let id = element.id;
        let parent = self
            .get_mut(parent)
            .ok_or_else(|| anyhow!("Parent element {parent:?} is not in the document"))?;
        parent.children.push(element);
        Ok(id)
    }

    /// Detach an element (and its subtree). Returns false if it was already gone.
    pub fn remove(&mut self, id: ElementId) -> bool {
        fn remove_from(nodes: &mut Vec<Element>, id: ElementId) -> bool {
            if let Some(pos) = nodes.iter().position(|n| n.id == id) {
                nodes.remove(pos);
                return true;
            }
            nodes.iter_mut().any(|n| remove_from(&mut n.children, id))
        }
        remove_from(&mut self.body, id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.body.iter().find_map(|e| e.find(id))
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.body.iter_mut().find_map(|e| e.find_mut(id))
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    /// All elements carrying `class`, depth-first in document order.
    pub fn elements_with_class(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        for element in &self.body {
            element.collect_by_class(class, &mut out);
        }
        out
    }

    /// Current selection of a file input.
    pub fn files(&self, input: ElementId) -> Result<&[SelectedFile]> {
        match self.get(input).map(|e| &e.kind) {
            Some(ElementKind::FileInput { files }) => Ok(files.as_slice()),
            Some(_) => bail!("Element {input:?} is not a file input"),
            None => bail!("File input {input:?} is not in the document"),
        }
    }

    /// Replace the selection of a file input.
    pub fn set_files(&mut self, input: ElementId, selection: Vec<SelectedFile>) -> Result<()> {
        match self.get_mut(input).map(|e| &mut e.kind) {
            Some(ElementKind::FileInput { files }) => {
                *files = selection;
                Ok(())
            }
            Some(_) => bail!("Element {input:?} is not a file input"),
            None => bail!("File input {input:?} is not in the document"),
        }
    }

    /// Submission target of a form.
    pub fn form_action(&self, form: ElementId) -> Result<&str> {
        match self.get(form).map(|e| &e.kind) {
            Some(ElementKind::Form { action }) => Ok(action.as_str()),
            Some(_) => bail!("Element {form:?} is not a form"),
            None => bail!("Form {form:?} is not in the document"),
        }
    }
}

/// Element ids of the upload page skeleton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadPage {
    pub form: ElementId,
    pub file_input: ElementId,
}

/// Build the page skeleton: a body holding one form with one file input.
pub fn upload_page(action: &str) -> Result<(Document, UploadPage)> {
    let mut doc = Document::new();
    let form = doc.create_element(
        ElementKind::Form {
            action: action.to_string(),
        },
        "upload-form",
        "",
    );
    let form = doc.append(form);
    let input = doc.create_element(
        ElementKind::FileInput { files: Vec::new() },
        "file-input",
        "",
    );
    let file_input = doc.append_child(form, input)?;
    Ok((doc, UploadPage { form, file_input }))
}
