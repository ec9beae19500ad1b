//! JSON bodies shaped like Datatracker responses.

use serde_json::{Value, json};

/// One collection page. `next` is the path and query of the following page.
pub fn page(objects: Vec<Value>, next: Option<&str>) -> Value {
    json!({
        "meta": {
            "limit": 100,
            "next": next,
            "offset": 0,
            "previous": null,
            "total_count": objects.len(),
        },
        "objects": objects,
    })
}

pub fn stream(slug: &str, order: i32) -> Value {
    json!({
        "resource_uri": format!("/api/v1/name/streamname/{slug}/"),
        "slug": slug,
        "name": slug.to_uppercase(),
        "desc": "",
        "used": true,
        "order": order,
    })
}

pub fn person(id: u64, name: &str) -> Value {
    json!({
        "resource_uri": format!("/api/v1/person/person/{id}/"),
        "id": id,
        "name": name,
        "name_from_draft": name,
        "ascii": name,
        "ascii_short": null,
        "user": "",
        "time": "2012-02-26T00:03:54",
        "photo": "",
        "photo_thumb": "",
        "biography": "",
        "consent": true,
    })
}

pub fn email(address: &str, person_id: u64) -> Value {
    json!({
        "resource_uri": format!("/api/v1/person/email/{address}/"),
        "person": format!("/api/v1/person/person/{person_id}/"),
        "address": address,
        "time": "1970-01-01T23:59:59",
        "origin": "author",
        "primary": true,
        "active": true,
    })
}

pub fn document(id: u64, name: &str, rfc: Option<u32>) -> Value {
    json!({
        "id": id,
        "resource_uri": format!("/api/v1/doc/document/{name}/"),
        "name": name,
        "title": "RTP: A Transport Protocol for Real-Time Applications",
        "pages": 104,
        "words": 34861,
        "time": "2015-10-14T13:49:52",
        "notify": "",
        "expires": null,
        "type": "/api/v1/name/doctypename/draft/",
        "rfc": rfc,
        "rev": "12",
        "abstract": "This memorandum describes RTP.",
        "internal_comments": "",
        "order": 1,
        "note": "",
        "ad": null,
        "shepherd": null,
        "group": "/api/v1/group/group/1041/",
        "stream": "/api/v1/name/streamname/ietf/",
        "intended_std_level": null,
        "std_level": "/api/v1/name/stdlevelname/std/",
        "states": ["/api/v1/doc/state/3/"],
        "submissions": [],
        "tags": [],
        "uploaded_filename": "",
        "external_url": "",
    })
}

pub fn alias(id: u64, name: &str, document_name: &str) -> Value {
    json!({
        "id": id,
        "resource_uri": format!("/api/v1/doc/docalias/{id}/"),
        "document": format!("/api/v1/doc/document/{document_name}/"),
        "name": name,
    })
}

pub fn group(id: u64, acronym: &str) -> Value {
    json!({
        "acronym": acronym,
        "ad": null,
        "charter": format!("/api/v1/doc/document/charter-ietf-{acronym}/"),
        "comments": "",
        "description": "",
        "id": id,
        "list_archive": "",
        "list_email": format!("{acronym}@ietf.org"),
        "list_subscribe": "",
        "name": format!("{acronym} working group"),
        "parent": "/api/v1/group/group/1324/",
        "resource_uri": format!("/api/v1/group/group/{id}/"),
        "state": "/api/v1/name/groupstatename/active/",
        "time": "2016-10-01T00:00:00",
        "type": "/api/v1/name/grouptypename/wg/",
        "unused_states": [],
        "unused_tags": [],
    })
}

pub const RFC_INDEX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rfc-index xmlns="http://www.rfc-editor.org/rfc-index">
  <bcp-entry><doc-id>BCP0014</doc-id><is-also><doc-id>RFC2119</doc-id></is-also></bcp-entry>
  <rfc-entry>
    <doc-id>RFC2119</doc-id>
    <title>Key words for use in RFCs to Indicate Requirement Levels</title>
    <author><name>S. Bradner</name></author>
    <date><month>March</month><year>1997</year></date>
    <current-status>BEST CURRENT PRACTICE</current-status>
    <publication-status>BEST CURRENT PRACTICE</publication-status>
    <stream>IETF</stream>
  </rfc-entry>
</rfc-index>"#;
