//! An ordered sequence of images that is augmented as a unit.

use image::DynamicImage;

/// Height, width and channel count of a single image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Shape {
    pub height: u32,
    pub width: u32,
    pub channels: u8,
}

impl Shape {
    pub fn of(image: &DynamicImage) -> Self {
        Shape {
            height: image.height(),
            width: image.width(),
            channels: image.color().channel_count(),
        }
    }
}

/// Images in a batch are independent of each other.
/// Every augmentation returns a batch of the same length, order and per-image shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    images: Vec<DynamicImage>,
}

impl Batch {
    pub fn new(images: Vec<DynamicImage>) -> Self {
        Batch { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[DynamicImage] {
        &self.images
    }

    pub fn into_images(self) -> Vec<DynamicImage> {
        self.images
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DynamicImage> {
        self.images.iter()
    }

    pub fn shapes(&self) -> Vec<Shape> {
        self.images.iter().map(Shape::of).collect()
    }
}

impl From<Vec<DynamicImage>> for Batch {
    fn from(images: Vec<DynamicImage>) -> Self {
        Batch::new(images)
    }
}

impl FromIterator<DynamicImage> for Batch {
    fn from_iter<I: IntoIterator<Item = DynamicImage>>(iter: I) -> Self {
        Batch::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Batch {
    type Item = DynamicImage;
    type IntoIter = std::vec::IntoIter<DynamicImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a DynamicImage;
    type IntoIter = std::slice::Iter<'a, DynamicImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb32FImage, RgbaImage};

    #[test]
    fn test_shapes() {
        let batch: Batch = vec![
            DynamicImage::ImageLuma8(GrayImage::new(4, 3)),
            DynamicImage::ImageRgba8(RgbaImage::new(2, 7)),
            DynamicImage::ImageRgb32F(Rgb32FImage::new(5, 5)),
        ]
        .into();
        assert_eq!(batch.len(), 3);
        assert_eq!(
            batch.shapes(),
            vec![
                Shape {
                    height: 3,
                    width: 4,
                    channels: 1
                },
                Shape {
                    height: 7,
                    width: 2,
                    channels: 4
                },
                Shape {
                    height: 5,
                    width: 5,
                    channels: 3
                },
            ]
        );
    }

    #[test]
    fn test_empty() {
        let batch = Batch::default();
        assert!(batch.is_empty());
        assert!(batch.shapes().is_empty());
        assert_eq!(batch.into_images().len(), 0);
    }
}
