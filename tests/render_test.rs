#[cfg(test)]
mod tests {
    use plotters::prelude::*;
    use policy_dashboard::{DashboardConfig, draw_dashboard, render_dashboard};
    use std::fs;

    fn test_config(path: impl Into<std::path::PathBuf>) -> DashboardConfig {
        DashboardConfig::default()
            .with_output_path(path)
            .with_dimensions(900, 620)
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.png");
        render_dashboard(&test_config(&path)).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn test_render_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        render_dashboard(&test_config(&first)).unwrap();
        render_dashboard(&test_config(&second)).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_buffer_pixels_are_deterministic() {
        let config = test_config("unused.png");
        let (w, h) = (config.width, config.height);

        let render_once = || {
            let mut buf = vec![0u8; (w * h * 3) as usize];
            {
                let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
                draw_dashboard(&root, &config).unwrap();
                root.present().unwrap();
            }
            buf
        };

        assert_eq!(render_once(), render_once());
    }

    #[test]
    fn test_render_touches_the_canvas() {
        let config = test_config("unused.png");
        let (w, h) = (config.width, config.height);
        let mut buf = vec![0u8; (w * h * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
            draw_dashboard(&root, &config).unwrap();
            root.present().unwrap();
        }

        // White background plus non-white chart ink
        assert!(buf.iter().any(|&b| b == 0xff));
        assert!(buf.iter().any(|&b| b != 0xff));
    }
}
