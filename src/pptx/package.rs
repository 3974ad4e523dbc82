//! OPC package assembly.
//!
//! Serializes a [`Presentation`] into the ZIP container PowerPoint expects:
//! `[Content_Types].xml`, package and part relationships, the static
//! master/layout/theme parts, one slide part per slide, and embedded media.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

use crate::pptx::constants::{content_type as ct, rel_type as rt};
use crate::pptx::presentation::Presentation;
use crate::pptx::template;
use crate::pptx::xml::escape_xml;
use crate::Result;

/// Serialize a presentation into `.pptx` bytes.
pub(crate) fn write_package(pres: &Presentation) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    // Assign media part names and per-slide image relationships up front;
    // both [Content_Types].xml and the slide parts need them.
    let mut media: Vec<(String, &[u8])> = Vec::new();
    let mut slide_image_rels: Vec<Vec<String>> = Vec::new();
    let mut cti = ContentTypes::new();

    for slide in &pres.slides {
        let mut rel_ids = Vec::new();
        for (data, format) in slide.images() {
            let name = format!("image{}.{}", media.len() + 1, format.extension());
            // rId1 is the slide layout; images follow
            rel_ids.push(format!("rId{}", rel_ids.len() + 2));
            cti.add_default(format.extension(), format.mime_type());
            media.push((name, data));
        }
        slide_image_rels.push(rel_ids);
    }

    cti.add_override("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN);
    cti.add_override("/ppt/slideMasters/slideMaster1.xml", ct::PML_SLIDE_MASTER);
    cti.add_override("/ppt/slideLayouts/slideLayout1.xml", ct::PML_SLIDE_LAYOUT);
    cti.add_override("/ppt/theme/theme1.xml", ct::OFC_THEME);
    cti.add_override("/docProps/core.xml", ct::OPC_CORE_PROPERTIES);
    cti.add_override("/docProps/app.xml", ct::OFC_EXTENDED_PROPERTIES);
    for index in 0..pres.slides.len() {
        cti.add_override(
            &format!("/ppt/slides/slide{}.xml", index + 1),
            ct::PML_SLIDE,
        );
    }

    let add = |zip: &mut ZipWriter<Cursor<Vec<u8>>>, path: &str, bytes: &[u8]| -> Result<()> {
        zip.start_file(path, options)?;
        zip.write_all(bytes)?;
        Ok(())
    };

    add(&mut zip, "[Content_Types].xml", cti.to_xml().as_bytes())?;

    // Package-level relationships
    let mut pkg_rels = Relationships::new();
    pkg_rels.add("rId1", rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
    pkg_rels.add("rId2", rt::CORE_PROPERTIES, "docProps/core.xml");
    pkg_rels.add("rId3", rt::EXTENDED_PROPERTIES, "docProps/app.xml");
    add(&mut zip, "_rels/.rels", pkg_rels.to_xml().as_bytes())?;

    add(&mut zip, "docProps/core.xml", template::core_props_xml().as_bytes())?;
    add(&mut zip, "docProps/app.xml", template::app_props_xml().as_bytes())?;

    // Presentation part: master is rId1, slides follow
    let slide_rel_ids: Vec<String> = (0..pres.slides.len())
        .map(|index| format!("rId{}", index + 2))
        .collect();
    let pres_xml = pres.presentation_xml(&slide_rel_ids)?;
    add(&mut zip, "ppt/presentation.xml", pres_xml.as_bytes())?;

    let mut pres_rels = Relationships::new();
    pres_rels.add("rId1", rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    for (index, rel_id) in slide_rel_ids.iter().enumerate() {
        pres_rels.add(rel_id, rt::SLIDE, &format!("slides/slide{}.xml", index + 1));
    }
    add(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        pres_rels.to_xml().as_bytes(),
    )?;

    // Static parts and their relationships
    add(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        template::slide_master_xml().as_bytes(),
    )?;
    let mut master_rels = Relationships::new();
    master_rels.add("rId1", rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    master_rels.add("rId2", rt::THEME, "../theme/theme1.xml");
    add(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        master_rels.to_xml().as_bytes(),
    )?;

    add(
        &mut zip,
        "ppt/slideLayouts/slideLayout1.xml",
        template::slide_layout_xml().as_bytes(),
    )?;
    let mut layout_rels = Relationships::new();
    layout_rels.add("rId1", rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    add(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        layout_rels.to_xml().as_bytes(),
    )?;

    add(&mut zip, "ppt/theme/theme1.xml", template::theme_xml().as_bytes())?;

    // Slide parts
    let mut media_index = 0usize;
    for (index, slide) in pres.slides.iter().enumerate() {
        let image_rels = &slide_image_rels[index];
        let slide_xml = slide.to_xml(image_rels)?;
        add(
            &mut zip,
            &format!("ppt/slides/slide{}.xml", index + 1),
            slide_xml.as_bytes(),
        )?;

        let mut slide_rels = Relationships::new();
        slide_rels.add("rId1", rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        for rel_id in image_rels {
            slide_rels.add(
                rel_id,
                rt::IMAGE,
                &format!("../media/{}", media[media_index].0),
            );
            media_index += 1;
        }
        add(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", index + 1),
            slide_rels.to_xml().as_bytes(),
        )?;
    }

    for (name, data) in &media {
        add(&mut zip, &format!("ppt/media/{}", name), data)?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Builder for `[Content_Types].xml`.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypes {
    /// Default content types by extension
    defaults: HashMap<String, String>,
    /// Override content types by partname
    overrides: HashMap<String, String>,
}

impl ContentTypes {
    fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: HashMap::new(),
        }
    }

    fn add_default(&mut self, extension: &str, content_type: &str) {
        self.defaults
            .insert(extension.to_string(), content_type.to_string());
    }

    fn add_override(&mut self, partname: &str, content_type: &str) {
        self.overrides
            .insert(partname.to_string(), content_type.to_string());
    }

    /// Generate the XML, with entries sorted for stable output.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push('\n');

        let mut exts: Vec<_> = self.defaults.keys().collect();
        exts.sort();
        for ext in exts {
            let _ = writeln!(
                xml,
                r#"  <Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(&self.defaults[ext])
            );
        }

        let mut partnames: Vec<_> = self.overrides.keys().collect();
        partnames.sort();
        for partname in partnames {
            let _ = writeln!(
                xml,
                r#"  <Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(&self.overrides[partname])
            );
        }

        xml.push_str("</Types>");
        xml
    }
}

/// An ordered set of relationships for one `.rels` part.
struct Relationships {
    rels: Vec<(String, &'static str, String)>,
}

impl Relationships {
    fn new() -> Self {
        Self { rels: Vec::new() }
    }

    fn add(&mut self, rel_id: &str, reltype: &'static str, target: &str) {
        self.rels
            .push((rel_id.to_string(), reltype, target.to_string()));
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push('\n');

        for (rel_id, reltype, target) in &self.rels {
            let _ = writeln!(
                xml,
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel_id),
                escape_xml(reltype),
                escape_xml(target)
            );
        }

        xml.push_str("</Relationships>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::format::TextFormat;
    use std::io::Read;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    fn sample() -> Presentation {
        let mut pres = Presentation::new();
        pres.set_slide_size(3_048_000, 3_048_000);
        let slide = pres.add_slide();
        slide
            .add_picture_from_bytes(PNG_MAGIC.to_vec(), 0, 0, 3_048_000, 3_048_000, None)
            .unwrap();
        slide.add_text_box("Hi", 100, 200, 300, 400, TextFormat::default());
        pres
    }

    fn read_entry(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts_present() {
        let bytes = write_package(&sample()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/media/image1.png",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {}", name);
        }
    }

    #[test]
    fn test_content_types_cover_parts() {
        let bytes = write_package(&sample()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let content = read_entry(&mut archive, "[Content_Types].xml");

        assert!(content.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(content.contains(r#"<Override PartName="/ppt/slides/slide1.xml""#));
        assert!(content.contains(r#"<Override PartName="/ppt/presentation.xml""#));
    }

    #[test]
    fn test_slide_references_image() {
        let bytes = write_package(&sample()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let slide = read_entry(&mut archive, "ppt/slides/slide1.xml");
        assert!(slide.contains(r#"<a:blip r:embed="rId2"/>"#));

        let rels = read_entry(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
        assert!(rels.contains(r#"Id="rId2""#));
        assert!(rels.contains("../media/image1.png"));
    }

    #[test]
    fn test_media_preserved_verbatim() {
        let bytes = write_package(&sample()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut entry = archive.by_name("ppt/media/image1.png").unwrap();
        let mut data = Vec::new();
        entry.read_to_end(&mut data).unwrap();
        assert_eq!(data, PNG_MAGIC);
    }

    #[test]
    fn test_deterministic_output() {
        let a = write_package(&sample()).unwrap();
        let b = write_package(&sample()).unwrap();
        assert_eq!(a, b);
    }
}
