//! `tokio_util` codec over delimited frames.

use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, warn};

use crate::config::FrameConfig;
use crate::decoder::{decode_frame, Message};
use crate::encoder::{FrameEncoder, OutboundMessage};
use crate::error::{FrameError, Result};
use crate::escape::DELIMITER;

/// Splits a byte stream on 0x7E delimiters and decodes each frame.
///
/// Bytes ahead of an opening delimiter are discarded. Two adjacent
/// delimiters are treated as the tail of a lost frame followed by the head
/// of the next one. A delimited frame that fails to decode is dropped and
/// the stream continues; only [`FrameError::FrameTooLarge`] ends it.
///
/// Encoding fails with [`FrameError::FrameTooLarge`] for frames the decoder
/// would refuse.
#[derive(Debug, Clone, Default)]
pub struct Jt808Codec {
    encoder: FrameEncoder,
}

impl Jt808Codec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FrameConfig) -> Self {
        Self {
            encoder: FrameEncoder::with_config(config),
        }
    }

    fn max_frame_size(&self) -> usize {
        self.encoder.config().max_frame_size
    }
}

impl Decoder for Jt808Codec {
    type Item = Message;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Message>> {
        loop {
            let Some(start) = src.iter().position(|&b| b == DELIMITER) else {
                if !src.is_empty() {
                    debug!(discarded = src.len(), "no delimiter in buffer, discarding");
                    src.clear();
                }
                return Ok(None);
            };
            if start > 0 {
                debug!(discarded = start, "discarding bytes ahead of frame");
                src.advance(start);
            }

            let Some(end) = src[1..].iter().position(|&b| b == DELIMITER).map(|i| i + 1) else {
                if src.len() > self.max_frame_size() {
                    return Err(FrameError::FrameTooLarge {
                        size: src.len(),
                        max: self.max_frame_size(),
                    });
                }
                return Ok(None); // Need more data
            };

            if end == 1 {
                src.advance(1);
                continue;
            }

            let frame = src.split_to(end + 1);
            if frame.len() > self.max_frame_size() {
                return Err(FrameError::FrameTooLarge {
                    size: frame.len(),
                    max: self.max_frame_size(),
                });
            }
            match decode_frame(&frame) {
                Ok(msg) => return Ok(Some(msg)),
                Err(err) => {
                    warn!(frame_len = frame.len(), error = %err, "dropping undecodable frame");
                    continue;
                }
            }
        }
    }
}

impl Encoder<OutboundMessage> for Jt808Codec {
    type Error = FrameError;

    fn encode(&mut self, item: OutboundMessage, dst: &mut BytesMut) -> Result<()> {
        let frame = self.encoder.encode(&item)?;
        if frame.len() > self.max_frame_size() {
            return Err(FrameError::FrameTooLarge {
                size: frame.len(),
                max: self.max_frame_size(),
            });
        }
        dst.extend_from_slice(&frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures_util::{SinkExt, StreamExt};
    use tokio_util::codec::{FramedRead, FramedWrite};

    use super::*;
    use crate::config::DEFAULT_MAX_FRAME_SIZE;
    use crate::encoder::encode_header_only;
    use crate::phone::TerminalPhone;

    const PHONE: TerminalPhone = TerminalPhone::from_bcd([0x13, 0x80, 0x01, 0x38, 0x00, 0x0F]);

    fn ack(flow_id: u16) -> Vec<u8> {
        encode_header_only(flow_id, &PHONE, 0x8001).unwrap().to_vec()
    }

    #[test]
    fn waits_for_closing_delimiter() {
        let frame = ack(1);
        let mut codec = Jt808Codec::new();
        let mut buf = BytesMut::from(&frame[..frame.len() - 1]);

        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), frame.len() - 1);

        buf.extend_from_slice(&frame[frame.len() - 1..]);
        let msg = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.flow_id(), 1);
        assert!(buf.is_empty());
    }

    #[test]
    fn skips_noise_and_empty_pairs() {
        let mut buf = BytesMut::from(&[0x01, 0x02, 0x7E, 0x7E][..]);
        buf.extend_from_slice(&ack(9));
        let msg = Jt808Codec::new().decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.flow_id(), 9);
        assert!(buf.is_empty());
    }

    #[test]
    fn clears_buffer_without_delimiter() {
        let mut buf = BytesMut::from(&b"garbage"[..]);
        assert!(Jt808Codec::new().decode(&mut buf).unwrap().is_none());
        assert!(buf.is_empty());
    }

    #[test]
    fn oversized_frame_is_rejected() {
        let mut codec = Jt808Codec::with_config(FrameConfig {
            max_frame_size: 8,
            ..FrameConfig::default()
        });
        let mut buf = BytesMut::from(&ack(1)[..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(FrameError::FrameTooLarge { size: 15, max: 8 })
        ));

        let mut partial = BytesMut::from(&[0x7E; 1][..]);
        partial.extend_from_slice(&[0u8; 10]);
        assert!(matches!(
            codec.decode(&mut partial),
            Err(FrameError::FrameTooLarge { size: 11, max: 8 })
        ));
    }

    #[test]
    fn drops_corrupt_frame_and_keeps_going() {
        let mut buf = BytesMut::from(&[0x7E, 0x80, 0x01, 0x81, 0x7E][..]);
        buf.extend_from_slice(&ack(4));
        let msg = Jt808Codec::new().decode(&mut buf).unwrap().unwrap();
        assert_eq!(msg.flow_id(), 4);
        assert!(buf.is_empty());
    }

    #[test]
    fn refuses_to_encode_frames_over_limit() {
        let mut codec = Jt808Codec::new();
        let mut dst = BytesMut::new();
        let err = codec
            .encode(OutboundMessage::new(0x0200, 1, PHONE, vec![0x7E; 2500]), &mut dst)
            .unwrap_err();
        assert!(matches!(
            err,
            FrameError::FrameTooLarge {
                size: 5015,
                max: DEFAULT_MAX_FRAME_SIZE
            }
        ));
        assert!(dst.is_empty());

        codec
            .encode(OutboundMessage::new(0x0200, 1, PHONE, vec![0x7E; 1000]), &mut dst)
            .unwrap();
        let msg = codec.decode(&mut dst).unwrap().unwrap();
        assert_eq!(msg.body.len(), 1000);
    }

    #[tokio::test]
    async fn corrupt_frame_does_not_end_stream() {
        let mut wire = ack(1);
        let cs = wire.len() - 2;
        wire[cs] ^= 0xFF;
        wire.extend_from_slice(&ack(2));
        wire.extend_from_slice(&ack(3));

        let mut reader = FramedRead::new(wire.as_slice(), Jt808Codec::new());
        let mut flows = Vec::new();
        while let Some(msg) = reader.next().await {
            flows.push(msg.unwrap().flow_id());
        }
        assert_eq!(flows, vec![2, 3]);
    }

    #[tokio::test]
    async fn reads_concatenated_frames() {
        let mut wire = ack(1);
        wire.extend_from_slice(&ack(2));
        wire.extend_from_slice(&ack(3));

        let mut reader = FramedRead::new(wire.as_slice(), Jt808Codec::new());
        let mut flows = Vec::new();
        while let Some(msg) = reader.next().await {
            flows.push(msg.unwrap().flow_id());
        }
        assert_eq!(flows, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn writes_frames() {
        let mut writer = FramedWrite::new(Vec::new(), Jt808Codec::new());
        writer
            .send(OutboundMessage::header_only(0x8001, 1, PHONE))
            .await
            .unwrap();
        writer
            .send(OutboundMessage::new(0x0200, 2, PHONE, &b"\x7e"[..]))
            .await
            .unwrap();

        let wire = writer.into_inner();
        let mut buf = BytesMut::from(wire.as_slice());
        let mut codec = Jt808Codec::new();
        let first = codec.decode(&mut buf).unwrap().unwrap();
        let second = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(first.msg_id(), 0x8001);
        assert_eq!(second.body.as_ref(), b"\x7e");
        assert!(buf.is_empty());
    }
}
