use recordboard_application::use_cases::{RenderRecordsUseCase, SubscribeRecordsUseCase};
use recordboard_domain::{DnsRecord, TableRow, DNS_RECORDS_EVENT};
use recordboard_infrastructure::events::{JsonLinesEventSource, RecordsEventEmitter};
use recordboard_infrastructure::surface::{HtmlTableSurface, SnapshotSurface, TextTableSurface};
use std::io::Write;
use tokio_util::sync::CancellationToken;

// ============================================================================
// Socket.IO frames from a file rendered into an HTML fragment
// ============================================================================

#[tokio::test]
async fn test_frames_file_to_html_fragment() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let frames_path = dir.path().join("frames.jsonl");
    let html_path = dir.path().join("records.html");

    let mut frames = std::fs::File::create(&frames_path).unwrap();
    writeln!(frames, r#"0{{"sid":"abc","pingInterval":25000}}"#).unwrap();
    writeln!(frames, "40").unwrap();
    writeln!(
        frames,
        r#"42["dns_records",{{"records":[{{"name":"stale.example.com","rdataset":"A 10.0.0.9","ttl":60}}]}}]"#
    )
    .unwrap();
    writeln!(frames, "2").unwrap();
    writeln!(
        frames,
        r#"42["dns_records",{{"records":[{{"name":"example.com","rdataset":"A 93.184.216.34","ttl":300}},{{"name":"<img src=x>","rdataset":"TXT \"heritage=external-dns\"","ttl":"30"}}]}}]"#
    )
    .unwrap();
    drop(frames);

    let mut source = JsonLinesEventSource::open(&frames_path).await.unwrap();
    let surface = HtmlTableSurface::new("records-body").with_output(&html_path);
    let mut use_case =
        SubscribeRecordsUseCase::new(RenderRecordsUseCase::new(surface), DNS_RECORDS_EVENT);

    // Act
    let summary = use_case
        .run(&mut source, CancellationToken::new())
        .await
        .unwrap();

    // Assert
    assert_eq!(summary.rendered, 2);
    assert_eq!(summary.last_row_count, Some(2));

    let html = std::fs::read_to_string(&html_path).unwrap();
    assert_eq!(html.matches("<tr>").count(), 2);
    assert!(html.contains("<td>example.com</td><td>A 93.184.216.34</td><td>300</td>"));
    assert!(html.contains("&lt;img src=x&gt;"));
    assert!(!html.contains("stale.example.com"));
}

#[tokio::test]
async fn test_bad_frame_does_not_stop_rendering() {
    let input = concat!(
        "[\"dns_records\",{\"records\":[{\"name\":\"a\",\"rdataset\":\"A 10.0.0.1\",\"ttl\":1}]}]\n",
        "garbage\n",
        "[\"dns_records\",{\"records\":[{\"name\":\"b\",\"rdataset\":\"A 10.0.0.2\",\"ttl\":2}]}]\n",
    );
    let mut source = JsonLinesEventSource::new(input.as_bytes());
    let mut use_case = SubscribeRecordsUseCase::new(
        RenderRecordsUseCase::new(TextTableSurface::new(Vec::new())),
        DNS_RECORDS_EVENT,
    );

    let summary = use_case
        .run(&mut source, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(summary.rendered, 2);
    assert_eq!(summary.malformed, 1);
    let written = String::from_utf8(use_case.into_renderer().into_surface().into_writer()).unwrap();
    assert_eq!(written.matches("Name").count(), 2);
}

#[tokio::test]
async fn test_non_utf8_frame_does_not_stop_rendering() {
    // Arrange
    let mut input =
        b"[\"dns_records\",{\"records\":[{\"name\":\"a\",\"rdataset\":\"A 10.0.0.1\",\"ttl\":1}]}]\n"
            .to_vec();
    input.extend_from_slice(b"[\"dns_records\",{\"records\":[{\"name\":\"");
    input.push(0xff);
    input.extend_from_slice(b"\"}]}]\n");
    input.extend_from_slice(
        b"[\"dns_records\",{\"records\":[{\"name\":\"c\",\"rdataset\":\"A 10.0.0.3\",\"ttl\":3}]}]\n",
    );
    let mut source = JsonLinesEventSource::new(input.as_slice());
    let mut use_case = SubscribeRecordsUseCase::new(
        RenderRecordsUseCase::new(TextTableSurface::new(Vec::new())),
        DNS_RECORDS_EVENT,
    );

    // Act
    let summary = use_case
        .run(&mut source, CancellationToken::new())
        .await
        .unwrap();

    // Assert
    assert_eq!(summary.rendered, 2);
    assert_eq!(summary.malformed, 1);
    let written = String::from_utf8(use_case.into_renderer().into_surface().into_writer()).unwrap();
    assert!(written.contains("A 10.0.0.3"));
}

// ============================================================================
// In-process emitter feeding a snapshot read by another task
// ============================================================================

#[tokio::test]
async fn test_emitter_to_snapshot() {
    let (emitter, mut source) = RecordsEventEmitter::new_enabled();
    let surface = SnapshotSurface::new();
    let reader = surface.reader();
    let mut use_case =
        SubscribeRecordsUseCase::new(RenderRecordsUseCase::new(surface), DNS_RECORDS_EVENT);

    let producer = tokio::spawn(async move {
        emitter.emit_records(&[
            DnsRecord::new("a.example.com", "A 10.0.0.1", 300),
            DnsRecord::new("b.example.com", "A 10.0.0.2", 300),
        ]);
        emitter.emit_records(&[DnsRecord::new("c.example.com", "AAAA ::1", 60)]);
    });

    let summary = use_case
        .run(&mut source, CancellationToken::new())
        .await
        .unwrap();
    producer.await.unwrap();

    assert_eq!(summary.rendered, 2);
    let table = reader.load();
    assert_eq!(table.rows(), &[TableRow::new("c.example.com", "AAAA ::1", "60")]);
}
