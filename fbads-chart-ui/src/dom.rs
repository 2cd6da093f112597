//! DOM mounting target for widget instances.

use anyhow::anyhow;
use fbads_widget::{Container, MountPoint};
use std::cell::Cell;
use web_sys::Element;

thread_local! {
    static NEXT_CHILD: Cell<u64> = const { Cell::new(0) };
}

/// A host element widget instances append their chart elements to.
pub struct DomContainer {
    element: Element,
}

impl DomContainer {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Look up the container element by DOM id.
    pub fn by_id(id: &str) -> anyhow::Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| anyhow!("no document available"))?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow!("element #{} not found", id))?;
        Ok(Self::new(element))
    }

    /// Remove every child element (previous renders).
    pub fn clear(&self) {
        self.element.set_inner_html("");
    }
}

impl Container for DomContainer {
    fn append_child(&self) -> anyhow::Result<MountPoint> {
        let document = self
            .element
            .owner_document()
            .ok_or_else(|| anyhow!("container is not attached to a document"))?;
        let child = document
            .create_element("div")
            .map_err(|e| anyhow!("create_element failed: {:?}", e))?;

        let n = NEXT_CHILD.with(|next| {
            let n = next.get();
            next.set(n + 1);
            n
        });
        let id = format!("fbads-chart-{}", n);
        child.set_id(&id);
        child
            .set_attribute("style", "width: 100%;")
            .map_err(|e| anyhow!("set_attribute failed: {:?}", e))?;

        self.element
            .append_child(&child)
            .map_err(|e| anyhow!("append_child failed: {:?}", e))?;
        Ok(MountPoint::new(id))
    }
}
