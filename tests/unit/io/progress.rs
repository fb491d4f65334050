//! Tests for progress bar management in batch rendering

#[cfg(test)]
mod tests {
    use pixeltile::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use pixeltile::io::progress::ProgressManager;
    use std::path::Path;

    // Tests small batches get one bar per file
    // Verified by always creating the batch bar
    #[test]
    fn test_small_batch_bars() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);
        assert_eq!(manager.bar_count(), 3);
    }

    // Tests large batches cap file bars and add a batch bar
    // Verified by removing the window cap
    #[test]
    fn test_large_batch_bars() {
        let mut manager = ProgressManager::default();
        manager.initialize(MAX_INDIVIDUAL_PROGRESS_BARS + 4);
        assert_eq!(manager.bar_count(), MAX_INDIVIDUAL_PROGRESS_BARS + 1);
    }

    // Tests the full lifecycle of a batch never panics, including out-of-window files
    // Verified by indexing statuses directly
    #[test]
    fn test_file_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(8);

        for index in 0..8 {
            manager.start_file(index, Path::new("images/photo.png"), 3);
            manager.advance(index, "rendering");
            manager.advance(index, "exporting");
            manager.advance(index, "png");
            manager.advance(index, "extra");
            manager.complete_file(index);
        }
        manager.advance(42, "unknown");
        manager.complete_file(42);
        manager.finish();

        assert_eq!(manager.bar_count(), MAX_INDIVIDUAL_PROGRESS_BARS + 1);
    }
}
