use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    inventory_previews: AtomicU64,
    inventory_fetch_errors: AtomicU64,
    imports: AtomicU64,
    assets_imported: AtomicU64,
    items_skipped: AtomicU64,
    image_fallbacks: AtomicU64,
}

impl Metrics {
    pub fn record_preview(&self) {
        self.inventory_previews.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch_error(&self) {
        self.inventory_fetch_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_import(&self, created: usize, skipped: usize, image_fallbacks: usize) {
        self.imports.fetch_add(1, Ordering::Relaxed);
        self.assets_imported
            .fetch_add(created as u64, Ordering::Relaxed);
        self.items_skipped
            .fetch_add(skipped as u64, Ordering::Relaxed);
        self.image_fallbacks
            .fetch_add(image_fallbacks as u64, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let previews = self.inventory_previews.load(Ordering::Relaxed);
        let fetch_errors = self.inventory_fetch_errors.load(Ordering::Relaxed);
        let imports = self.imports.load(Ordering::Relaxed);
        let imported = self.assets_imported.load(Ordering::Relaxed);
        let skipped = self.items_skipped.load(Ordering::Relaxed);
        let fallbacks = self.image_fallbacks.load(Ordering::Relaxed);

        format!(
            "# TYPE armory_inventory_previews_total counter\n\
armory_inventory_previews_total {}\n\
# TYPE armory_inventory_fetch_errors_total counter\n\
armory_inventory_fetch_errors_total {}\n\
# TYPE armory_imports_total counter\n\
armory_imports_total {}\n\
# TYPE armory_assets_imported_total counter\n\
armory_assets_imported_total {}\n\
# TYPE armory_items_skipped_total counter\n\
armory_items_skipped_total {}\n\
# TYPE armory_image_fallbacks_total counter\n\
armory_image_fallbacks_total {}\n",
            previews, fetch_errors, imports, imported, skipped, fallbacks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_reports_recorded_counters() {
        let metrics = Metrics::default();
        metrics.record_preview();
        metrics.record_import(3, 1, 2);
        metrics.record_fetch_error();
        let text = metrics.render_prometheus();
        assert!(text.contains("armory_inventory_previews_total 1\n"));
        assert!(text.contains("armory_assets_imported_total 3\n"));
        assert!(text.contains("armory_items_skipped_total 1\n"));
        assert!(text.contains("armory_image_fallbacks_total 2\n"));
        assert!(text.contains("armory_inventory_fetch_errors_total 1\n"));
    }
}
