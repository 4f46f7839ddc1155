use servocan_core::{
    EncodedMessage, ParsedResponse, RegisterCatalog, legacy, parse_response, registers, text, wire,
};

// Pretend-transport loop: a servo that answers every read with a fixed
// value, echoing the requested address back in RESPONSE_SINGLE layout.
fn answer_read(request: &EncodedMessage, value: u16) -> Vec<u8> {
    assert_eq!(request.payload[0], b'r');
    let servo_id = request.payload[1];
    let address = request.payload[2];
    let [lo, hi] = value.to_le_bytes();
    vec![0x00, b'v', servo_id, address, lo, hi]
}

#[test]
fn read_request_response_cycle() {
    let catalog = RegisterCatalog::new();
    let request = wire::build_read(7, registers::POSITION_EXT, false);
    let response = answer_read(&request, 1480);

    assert_eq!(
        parse_response(&catalog, &response),
        Some(ParsedResponse::Single {
            servo_id: 7,
            address: registers::POSITION_EXT,
            value: 1480,
            register_name: "POSITION_EXT".to_string(),
        })
    );
}

#[test]
fn response_round_trip_over_sampled_input_space() {
    let catalog = RegisterCatalog::new();
    for servo_id in [0u8, 1, 127, 255] {
        for address in [0u8, 0x0C, 0x32, 0xFE] {
            for value in [0u16, 1, 0x0100, 0xABCD, 0xFFFF] {
                let request = wire::build_read(servo_id, address, false);
                let response = answer_read(&request, value);
                match parse_response(&catalog, &response) {
                    Some(ParsedResponse::Single {
                        servo_id: sid,
                        address: addr,
                        value: val,
                        ..
                    }) => assert_eq!((sid, addr, val), (servo_id, address, value)),
                    other => panic!("expected single response, got {other:?}"),
                }
            }
        }
    }
}

#[test]
fn set_can_id_sequence_is_complete_and_ordered() {
    let frames = wire::set_can_id(1, 0x0105, false);
    let addresses: Vec<u8> = frames.iter().map(|frame| frame.payload[2]).collect();
    assert_eq!(addresses, vec![registers::CAN_ID_LOW, registers::CAN_ID_HIGH]);
    for frame in &frames {
        assert_eq!(frame.arbitration_id, 2);
        assert!(frame.payload.len() <= servocan_core::MAX_PAYLOAD_LEN);
    }
}

#[test]
fn parsed_response_json_tags_match_protocol_vocabulary() {
    let catalog = RegisterCatalog::new();
    let single = parse_response(&catalog, &[0x00, b'v', 0x01, 0x0A, 0x34, 0x12]).unwrap();
    let value = serde_json::to_value(&single).expect("response json");
    assert_eq!(value["type"], "single_response");
    assert_eq!(value["value"], 0x1234);

    let dual = parse_response(
        &catalog,
        &[0x00, b'V', 0x01, 0x3C, 0x02, 0x00, 0x3E, 0x34, 0x00],
    )
    .unwrap();
    let value = serde_json::to_value(&dual).expect("response json");
    assert_eq!(value["type"], "dual_response");
    assert_eq!(value["register_name_a"], "CAN_ID_HIGH");
}

#[test]
fn legacy_and_current_writes_agree_on_value_bytes() {
    let current = wire::build_write(5, 0x06, 0x0102, false);
    let old = legacy::build_legacy_write(5, 0x06, 0x0102);
    assert_eq!(&current.payload[3..5], &old.payload[4..6]);
}

#[test]
fn hex_display_survives_reparse_for_every_frame_kind() {
    let frames = [
        wire::build_write(1, 0x0C, 1500, false),
        wire::build_read_dual(1, 0x3C, 0x3E, true),
        legacy::build_legacy_read(9, 0x10),
    ];
    for frame in frames {
        let rendered = text::format_hex_bytes(&frame.payload);
        assert_eq!(text::parse_hex_input(&rendered).unwrap(), frame.payload);
    }
}
