use quick_xml::escape::escape;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

pub struct CannedServer {
    pub url: String,
    //Raw request as received on the socket
    pub request: oneshot::Receiver<String>,
}

/// Accepts one connection on a loopback port and answers it with `status_line` and `body`.
pub async fn serve_once(status_line: &str, body: &str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        let _ = tx.send(request);
    });

    CannedServer {
        url: format!("http://{}/app/uat/IBLeTender", addr),
        request: rx,
    }
}

/// Address that nothing listens on.
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/app/uat/IBLeTender", addr)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

pub fn iec_request_xml(response_code: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <IECRequest><Transaction>\
         <Request_ID>REQ-0001</Request_ID>\
         <CHALLAN_CODE>IEC</CHALLAN_CODE>\
         <CHALLAN_NO>CH-778</CHALLAN_NO>\
         <Client_AccountNo>201000123456</Client_AccountNo>\
         <Client_Name>TENDER CELL</Client_Name>\
         <Amount>1500.00</Amount>\
         <Remitter_Name>ACME TRADERS</Remitter_Name>\
         <Remitter_AccountNo>009988776655</Remitter_AccountNo>\
         <Remitter_IFSC>INDB0000001</Remitter_IFSC>\
         <Remitter_Bank>INDUSIND BANK</Remitter_Bank>\
         <Remitter_Branch>MUMBAI</Remitter_Branch>\
         <Remitter_UTR>UTR123</Remitter_UTR>\
         <Pay_Method>NEFT</Pay_Method>\
         <Credit_AccountNo>201000654321</Credit_AccountNo>\
         <Inward_Ref_Num>INW-9</Inward_Ref_Num>\
         <Credit_Time>2024-01-02 10:11:12</Credit_Time>\
         <Reserve1></Reserve1><Reserve2/><Reserve3>x</Reserve3><Reserve4></Reserve4>\
         <ResponseCode>{}</ResponseCode>\
         <ResponseDesc>Success</ResponseDesc>\
         </Transaction></IECRequest>",
        response_code
    )
}

/// GetIecDataResponse envelope with `inner` escaped into GetIecDataResult.
pub fn get_iec_data_response_xml(inner: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <s:Envelope xmlns:s=\"http://schemas.xmlsoap.org/soap/envelope/\">\
         <s:Body>\
         <GetIecDataResponse xmlns=\"http://tempuri.org/\">\
         <GetIecDataResult>{}</GetIecDataResult>\
         </GetIecDataResponse>\
         </s:Body>\
         </s:Envelope>",
        escape(inner)
    )
}
