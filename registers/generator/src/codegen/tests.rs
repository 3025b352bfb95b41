// Licensed under the Apache-2.0 license

//! Tests for the code generator.

mod test {
    use super::super::{
        generate_bitfields, generate_bitfields_from_file, generate_bitfields_with_config,
        load_device, load_device_from_file,
    };
    use crate::config::GeneratorConfig;
    use crate::types::Access;
    use std::io::Write;
    use std::path::Path;

    /// Wrap register elements into a complete document.
    fn document(registers: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE registerdefinition SYSTEM "registerdefinition.dtd">
<registerdefinition>
  <devicename>CC1200</devicename>
{registers}
</registerdefinition>
"#
        )
    }

    const FREQ_OFF: &str = r#"
  <Register>
    <Name>FREQ_OFF</Name>
    <Address>0x01</Address>
    <Reset>0x00</Reset>
    <Bitfield>
      <Name>FREQ_OFF</Name>
      <Start>7</Start>
      <Stop>0</Stop>
      <Access>R/W</Access>
      <Reset>0x00</Reset>
    </Bitfield>
  </Register>
"#;

    #[test]
    fn test_single_register() {
        let code = generate_bitfields(&document(FREQ_OFF)).unwrap();
        assert_eq!(
            code,
            r#"bitfield! {
    ///
    /// # Address
    ///
    /// The address of this register is 0x01
    #[derive(Clone, Copy)]
    pub struct FreqOff(u8);

    pub freq_off, set_freq_off: 7, 0;
}

impl Default for FreqOff {
    fn default() -> Self {
        Self(0x00)
    }
}
"#
        );
    }

    #[test]
    fn test_load_device() {
        let device = load_device(&document(
            r#"
  <Register>
    <Name>DEM_STATUS</Name>
    <Address>0x2F76</Address>
    <Description>Demodulator Status</Description>
    <Reset>0x00</Reset>
    <Bitfield>
      <Name>RSSI_STEP_FOUND</Name>
      <Start>7</Start>
      <Stop>7</Stop>
      <Access>R</Access>
      <Reset>0x00</Reset>
      <Description>RSSI step found during packet reception</Description>
      <Value>
        <Number>0</Number>
        <Brief>No RSSI step found during packet reception</Brief>
      </Value>
      <Value>
        <Number>1</Number>
        <Brief>RSSI step found during packet reception</Brief>
      </Value>
    </Bitfield>
    <Bitfield>
      <Name>DEM_STATUS_RESERVED6_0</Name>
      <Start>6</Start>
      <Stop>0</Stop>
      <Access>R</Access>
      <Reset>0x00</Reset>
    </Bitfield>
  </Register>
"#,
        ))
        .unwrap();

        assert_eq!(device.name, "CC1200");
        assert_eq!(device.registers.len(), 1);
        let register = &device.registers[0];
        assert_eq!(register.name, "DEM_STATUS");
        assert_eq!(register.address, "0x2F76");
        assert_eq!(register.description.as_deref(), Some("Demodulator Status"));
        assert_eq!(register.bitfields.len(), 2);

        let field = &register.bitfields[0];
        assert_eq!(field.start, 7);
        assert_eq!(field.stop, 7);
        assert_eq!(field.access(), Access::ReadOnly);
        assert_eq!(field.values.len(), 2);
        assert_eq!(field.values[1].number, "1");
        assert_eq!(
            field.values[1].brief,
            "RSSI step found during packet reception"
        );

        assert_eq!(register.bitfields[1].description, None);
        assert!(register.bitfields[1].values.is_empty());
    }

    #[test]
    fn test_read_only_and_values() {
        let code = generate_bitfields(&document(
            r#"
  <Register>
    <Name>DEM_STATUS</Name>
    <Address>0x2F76</Address>
    <Description>Demodulator Status</Description>
    <Reset>0x0</Reset>
    <Bitfield>
      <Name>IMAGE_FOUND</Name>
      <Start>0</Start>
      <Stop>0</Stop>
      <Access>R</Access>
      <Reset>0x00</Reset>
      <Description>Image found detector</Description>
      <Value>
        <Number>0</Number>
        <Brief>No image found</Brief>
      </Value>
      <Value>
        <Number>1</Number>
        <Brief>Image found</Brief>
      </Value>
    </Bitfield>
  </Register>
"#,
        ))
        .unwrap();

        assert_eq!(
            code,
            r#"bitfield! {
    /// Demodulator Status
    ///
    /// # Address
    ///
    /// The address of this register is 0x2F76
    #[derive(Clone, Copy)]
    pub struct DemStatus(u8);

    /// Image found detector
    ///
    /// # Values
    ///
    /// - 0b: No image found
    /// - 1b: Image found
    ///
    /// The default value is 0x00
    pub image_found, _: 0;
}

impl Default for DemStatus {
    fn default() -> Self {
        Self(0x00)
    }
}
"#
        );
    }

    #[test]
    fn test_description_cleanup() {
        let code = generate_bitfields(&document(
            r#"
  <Register>
    <Name>IOCFG3</Name>
    <Address>0x00</Address>
    <Reset>0x6</Reset>
    <Bitfield>
      <Name>GPIO3_CFG</Name>
      <Start>5</Start>
      <Stop>0</Stop>
      <Access>R/W</Access>
      <Reset>0x06</Reset>
      <Description>Output selection.&#13;
&lt;table&gt;&lt;tr&gt;&lt;td&gt;0&lt;/td&gt;&lt;/tr&gt;&lt;/table&gt;&#13;
Default: PKT_SYNC_RXTX</Description>
    </Bitfield>
  </Register>
"#,
        ))
        .unwrap();

        assert!(code.contains(
            "    /// Output selection.\n    ///\n    /// Default: PKT_SYNC_RXTX\n    pub gpio3_cfg, set_gpio3_cfg: 5, 0;\n"
        ));
        assert!(!code.contains("table"));
        assert!(!code.contains('\r'));
        assert!(code.contains("        Self(0x06)\n"));
    }

    #[test]
    fn test_registers_keep_document_order() {
        let code = generate_bitfields(&document(
            r#"
  <Register>
    <Name>SYNC3</Name>
    <Address>0x04</Address>
    <Reset>0x93</Reset>
    <Bitfield><Name>SYNC31_24</Name><Start>7</Start><Stop>0</Stop><Access>R/W</Access><Reset>0x93</Reset></Bitfield>
  </Register>
  <Register>
    <Name>SYNC2</Name>
    <Address>0x05</Address>
    <Reset>0x0B</Reset>
    <Bitfield><Name>SYNC23_16</Name><Start>7</Start><Stop>0</Stop><Access>R/W</Access><Reset>0x0B</Reset></Bitfield>
  </Register>
"#,
        ))
        .unwrap();

        let sync3 = code.find("pub struct Sync3(u8);").unwrap();
        let sync2 = code.find("pub struct Sync2(u8);").unwrap();
        assert!(sync3 < sync2);
        assert!(code.contains("        Self(0x93)\n"));
        assert!(code.contains("        Self(0x0b)\n"));
        assert!(code.contains("}\n\nbitfield! {\n"));
        assert!(code.ends_with("}\n"));
        assert!(!code.ends_with("}\n\n"));
    }

    #[test]
    fn test_ignores_unknown_elements() {
        let code = generate_bitfields(&document(
            r#"
  <Revision>ignored at the top level</Revision>
  <Register>
    <Name>PKT_LEN</Name>
    <Address>0x2E</Address>
    <Vendor>ignored</Vendor>
    <Reset>0x03</Reset>
    <Bitfield>
      <Name>PACKET_LENGTH</Name>
      <Start>7</Start>
      <Stop>0</Stop>
      <Access>R/W</Access>
      <Reset>0x03</Reset>
      <Tooltip>ignored as well</Tooltip>
    </Bitfield>
  </Register>
"#,
        ))
        .unwrap();
        assert!(code.contains("pub struct PktLen(u8);"));
        assert!(code.contains("pub packet_length, set_packet_length: 7, 0;"));
        assert!(!code.contains("ignored"));
    }

    #[test]
    fn test_deterministic() {
        let input = document(FREQ_OFF);
        let first = generate_bitfields(&input).unwrap();
        let second = generate_bitfields(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_header() {
        let code =
            generate_bitfields_with_config(&document(FREQ_OFF), &GeneratorConfig::with_defaults())
                .unwrap();
        assert!(code.starts_with("// Licensed under the Apache-2.0 license\n"));
        assert!(code.contains("\nuse bitfield::bitfield;\n\nbitfield! {\n"));
    }

    #[test]
    fn test_empty_device() {
        assert_eq!(generate_bitfields(&document("")).unwrap(), "");
    }

    #[test]
    fn test_type_name_collision() {
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>AB_CD</Name>
    <Address>0x00</Address>
    <Reset>0x00</Reset>
  </Register>
  <Register>
    <Name>AB__CD</Name>
    <Address>0x01</Address>
    <Reset>0x00</Reset>
  </Register>
"#,
        ))
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("AB_CD"), "{message}");
        assert!(message.contains("AB__CD"), "{message}");
        assert!(message.contains("AbCd"), "{message}");
    }

    #[test]
    fn test_invalid_reset() {
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>MARC_SPARE</Name>
    <Address>0x2F</Address>
    <Reset>0xZZ</Reset>
  </Register>
"#,
        ))
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("MARC_SPARE"), "{message}");
        assert!(message.contains("0xZZ"), "{message}");
    }

    #[test]
    fn test_reset_wider_than_register() {
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>WIDE</Name>
    <Address>0x00</Address>
    <Reset>0x100</Reset>
  </Register>
"#,
        ))
        .unwrap_err();
        assert!(format!("{err:#}").contains("WIDE"));
    }

    #[test]
    fn test_inverted_bit_range() {
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>MDMCFG1</Name>
    <Address>0x12</Address>
    <Reset>0x00</Reset>
    <Bitfield>
      <Name>FIFO_EN</Name>
      <Start>0</Start>
      <Stop>1</Stop>
      <Access>R/W</Access>
      <Reset>0x00</Reset>
    </Bitfield>
  </Register>
"#,
        ))
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("MDMCFG1"), "{message}");
        assert!(message.contains("FIFO_EN"), "{message}");
    }

    #[test]
    fn test_repeated_accessor() {
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>SETTLING_CFG</Name>
    <Address>0x00</Address>
    <Reset>0x00</Reset>
    <Bitfield><Name>FS_AUTOCAL</Name><Start>7</Start><Stop>4</Stop><Access>R/W</Access><Reset>0x0</Reset></Bitfield>
    <Bitfield><Name>fs_autocal</Name><Start>3</Start><Stop>0</Stop><Access>R/W</Access><Reset>0x0</Reset></Bitfield>
  </Register>
"#,
        ))
        .unwrap_err();
        assert!(format!("{err:#}").contains("fs_autocal"));
    }

    #[test]
    fn test_missing_required_element() {
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>NO_RESET</Name>
    <Address>0x00</Address>
  </Register>
"#,
        ))
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("NO_RESET"), "{message}");
        assert!(message.contains("Reset"), "{message}");
    }

    const A_B: &str = r#"
  <Register>
    <Name>A_B</Name>
    <Address>0x00</Address>
    <Reset>0x00</Reset>
    <Bitfield><Name>AB</Name><Start>7</Start><Stop>0</Stop><Access>R/W</Access><Reset>0x00</Reset></Bitfield>
  </Register>
"#;

    #[test]
    fn test_missing_bitfield_element() {
        let registers = format!(
            "{A_B}{}",
            r#"
  <Register>
    <Name>BAD_REG</Name>
    <Address>0x01</Address>
    <Reset>0x00</Reset>
    <Bitfield><Name>GOOD</Name><Start>7</Start><Stop>4</Stop><Access>R/W</Access><Reset>0x0</Reset></Bitfield>
    <Bitfield><Name>BADF</Name><Start>3</Start><Stop>0</Stop><Reset>0x0</Reset></Bitfield>
  </Register>
"#
        );
        let err = generate_bitfields(&document(&registers)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("BAD_REG"), "{message}");
        assert!(message.contains("BADF"), "{message}");
        assert!(message.contains("Access"), "{message}");
        assert!(!message.contains("GOOD"), "{message}");
    }

    #[test]
    fn test_mistyped_bitfield_element() {
        let registers = format!(
            "{A_B}{}",
            r#"
  <Register>
    <Name>BAD_REG</Name>
    <Address>0x01</Address>
    <Reset>0x00</Reset>
    <Bitfield><Name>BADF</Name><Start>x</Start><Stop>0</Stop><Access>R/W</Access><Reset>0x0</Reset></Bitfield>
  </Register>
"#
        );
        let err = generate_bitfields(&document(&registers)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("BAD_REG"), "{message}");
        assert!(message.contains("BADF"), "{message}");
    }

    #[test]
    fn test_unnamed_register_reports_position() {
        let registers = format!(
            "{A_B}{}",
            r#"
  <Register>
    <Address>0x01</Address>
    <Reset>0x00</Reset>
  </Register>
"#
        );
        let err = generate_bitfields(&document(&registers)).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("register #2"), "{message}");
        assert!(message.contains("Name"), "{message}");
    }

    #[test]
    fn test_missing_device_name() {
        let err = generate_bitfields("<registerdefinition></registerdefinition>").unwrap_err();
        assert!(format!("{err:#}").contains("devicename"));
    }

    #[test]
    fn test_start_bit_past_register() {
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>WIDE_FIELD</Name>
    <Address>0x00</Address>
    <Reset>0x00</Reset>
    <Bitfield><Name>F</Name><Start>12</Start><Stop>0</Stop><Access>R/W</Access><Reset>0x0</Reset></Bitfield>
  </Register>
"#,
        ))
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("WIDE_FIELD"), "{message}");
        assert!(message.contains("Start bit 12"), "{message}");

        // Too large for the record type: reported by the loader
        let err = generate_bitfields(&document(
            r#"
  <Register>
    <Name>WIDE_FIELD</Name>
    <Address>0x00</Address>
    <Reset>0x00</Reset>
    <Bitfield><Name>F</Name><Start>300</Start><Stop>0</Stop><Access>R/W</Access><Reset>0x0</Reset></Bitfield>
  </Register>
"#,
        ))
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("WIDE_FIELD"), "{message}");
        assert!(message.contains("bitfield F"), "{message}");
    }

    #[test]
    fn test_malformed_xml() {
        assert!(generate_bitfields("<registerdefinition><Register>").is_err());
        assert!(generate_bitfields("").is_err());
    }

    #[test]
    fn test_wrong_root_element() {
        let err = generate_bitfields("<device><devicename>CC1200</devicename></device>")
            .unwrap_err();
        assert!(format!("{err:#}").contains("registerdefinition"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(document(FREQ_OFF).as_bytes()).unwrap();
        file.flush().unwrap();

        let device = load_device_from_file(file.path()).unwrap();
        assert_eq!(device.registers[0].name, "FREQ_OFF");

        let code = generate_bitfields_from_file(file.path()).unwrap();
        assert_eq!(code, generate_bitfields(&document(FREQ_OFF)).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let err = generate_bitfields_from_file(Path::new("does/not/exist.xml")).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.xml"));
    }
}
